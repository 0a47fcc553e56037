//! End-to-end resolution tests.
//!
//! Each section loads a small project document and queries it through the
//! facade, the way an editor integration would.

use std::ops::ControlFlow;

use vitrail_plomb::Project;
use vitrail_rosace::{AttributeDescriptor, AttributeKind, ComponentDetails, ProjectScope};

fn load(doc: &str) -> Project {
    let project = Project::from_json(doc).unwrap();
    assert!(
        project.issues().is_empty(),
        "unexpected issues: {:?}",
        project.issues()
    );
    project
}

fn names(attrs: &[AttributeDescriptor]) -> Vec<&str> {
    attrs.iter().map(|a| a.name.as_str()).collect()
}

fn file_of(project: &Project, descriptor: &AttributeDescriptor) -> String {
    let location = descriptor.location.expect("descriptor without a location");
    project.files().path(location.file).unwrap().to_string()
}

// =============================================================================
// Composition Tests
// =============================================================================

mod composition {
    use super::*;

    const DOC: &str = r#"{
        "components": {
            "UserCard": {
                "props": ["title"],
                "mixins": ["clickable"]
            },
            "GrandChild": {
                "props": ["own"],
                "extends": "Child"
            },
            "Child": {
                "props": ["inherited"],
                "extends": "Base"
            },
            "Base": {
                "props": ["root-prop"]
            }
        },
        "mixins": {
            "clickable": {
                "methods": { "click": {} },
                "mixins": ["hoverable"]
            },
            "hoverable": {
                "computed": { "hovering": {} },
                "mixins": ["focusable"]
            },
            "focusable": {
                "data": { "focused": {} }
            }
        }
    }"#;

    #[test]
    fn transitive_mixins_contribute_attributes() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("UserCard").unwrap();

        let attrs = ComponentDetails::new().attributes(Some(&def), &scope, false, false);
        assert_eq!(names(&attrs), ["title", "click", "hovering", "focused"]);
    }

    #[test]
    fn extends_chain_is_followed() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("GrandChild").unwrap();

        let attrs = ComponentDetails::new().attributes(Some(&def), &scope, false, true);
        assert_eq!(names(&attrs), ["own", "inherited", "root-prop"]);

        let found = ComponentDetails::new()
            .resolve_attribute(&def, &scope, "rootProp", false)
            .unwrap();
        assert_eq!(found.name, "root-prop");
        assert_eq!(file_of(&project, &found), "components/Base.vue");
    }

    #[test]
    fn own_declaration_shadows_composed() {
        let project = load(
            r#"{
                "components": { "Panel": { "props": ["width"], "mixins": ["sized"] } },
                "mixins": { "sized": { "props": ["width", "height"] } }
            }"#,
        );
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Panel").unwrap();
        let details = ComponentDetails::new();

        let found = details.resolve_attribute(&def, &scope, "width", false).unwrap();
        assert_eq!(file_of(&project, &found), "components/Panel.vue");

        let found = details.resolve_attribute(&def, &scope, "height", false).unwrap();
        assert_eq!(file_of(&project, &found), "mixins/sized.js");
    }

    #[test]
    fn cyclic_mixins_terminate() {
        let project = load(
            r#"{
                "components": { "Spinner": { "mixins": ["a"] } },
                "mixins": {
                    "a": { "mixins": ["b"], "props": ["from-a"] },
                    "b": { "mixins": ["a"], "props": ["from-b"] }
                }
            }"#,
        );
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Spinner").unwrap();
        let details = ComponentDetails::new();

        let attrs = details.attributes(Some(&def), &scope, false, true);
        assert_eq!(names(&attrs), ["from-a", "from-b"]);

        assert!(details.resolve_attribute(&def, &scope, "fromB", false).is_some());
        assert!(details.resolve_attribute(&def, &scope, "missing", false).is_none());
    }

    #[test]
    fn diamond_contributes_once() {
        let project = load(
            r#"{
                "components": { "App": { "mixins": ["left", "right"] } },
                "mixins": {
                    "left": { "mixins": ["shared"] },
                    "right": { "mixins": ["shared"] },
                    "shared": { "props": ["token"] }
                }
            }"#,
        );
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("App").unwrap();

        let attrs = ComponentDetails::new().attributes(Some(&def), &scope, false, false);
        assert_eq!(names(&attrs), ["token"]);
    }

    #[test]
    fn unknown_mixin_is_skipped() {
        let project = load(
            r#"{
                "components": { "Lone": { "props": ["only"], "mixins": ["ghost"] } }
            }"#,
        );
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Lone").unwrap();

        let attrs = ComponentDetails::new().attributes(Some(&def), &scope, false, false);
        assert_eq!(names(&attrs), ["only"]);
    }
}

// =============================================================================
// Global Mixin Tests
// =============================================================================

mod global_mixins {
    use super::*;

    const DOC: &str = r#"{
        "components": {
            "Footer": { "props": ["year"] }
        },
        "mixins": {
            "tracking": {
                "props": ["track-id"],
                "computed": { "trackUrl": {} }
            }
        },
        "globalMixins": ["tracking"]
    }"#;

    #[test]
    fn reached_without_a_definition() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let details = ComponentDetails::new();

        let attrs = details.attributes(None, &scope, false, false);
        assert_eq!(names(&attrs), ["track-id", "trackId", "trackUrl"]);

        let attrs = details.attributes(None, &scope, true, false);
        assert_eq!(names(&attrs), ["track-id", "trackId"]);
    }

    #[test]
    fn reached_from_every_component() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Footer").unwrap();
        let details = ComponentDetails::new();

        let attrs = details.attributes(Some(&def), &scope, false, true);
        assert_eq!(names(&attrs), ["year", "track-id", "track-url"]);

        let found = details.resolve_attribute(&def, &scope, "track-id", false).unwrap();
        assert_eq!(file_of(&project, &found), "mixins/tracking.js");
    }
}

// =============================================================================
// Directive Tests
// =============================================================================

mod directives {
    use super::*;

    const DOC: &str = r#"{
        "components": {
            "Editor": {
                "props": ["content"],
                "directives": { "highlight": {}, "colorSwap": {} }
            },
            "Viewer": { "props": ["source"] }
        },
        "directives": { "focus": {}, "highlight": {} }
    }"#;

    #[test]
    fn usable_directives_are_listed() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Editor").unwrap();

        let attrs = ComponentDetails::new().attributes(Some(&def), &scope, false, true);
        assert_eq!(
            names(&attrs),
            ["content", "v-focus", "v-highlight", "v-color-swap", "v-highlight"]
        );
        assert_eq!(attrs[0].kind, AttributeKind::Prop);
        assert!(attrs[1..].iter().all(AttributeDescriptor::is_directive));
    }

    #[test]
    fn global_wins_over_local() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Editor").unwrap();

        let found = ComponentDetails::new()
            .resolve_attribute(&def, &scope, "v-highlight", false)
            .unwrap();
        assert_eq!(file_of(&project, &found), "directives.js");
    }

    #[test]
    fn local_stays_in_its_file() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let details = ComponentDetails::new();

        let editor = project.definition("Editor").unwrap();
        let found = details
            .resolve_attribute(&editor, &scope, "v-color-swap", false)
            .unwrap();
        assert_eq!(found.kind, AttributeKind::Directive);
        assert_eq!(file_of(&project, &found), "components/Editor.vue");

        let viewer = project.definition("Viewer").unwrap();
        assert!(details
            .resolve_attribute(&viewer, &scope, "v-color-swap", false)
            .is_none());
        assert!(details
            .resolve_attribute(&viewer, &scope, "v-focus", false)
            .is_some());
    }

    #[test]
    fn either_spelling_resolves() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Editor").unwrap();
        let details = ComponentDetails::new();

        assert!(details
            .resolve_attribute(&def, &scope, "v-colorSwap", false)
            .is_some());
    }

    #[test]
    fn v_prefix_is_required() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Editor").unwrap();
        let details = ComponentDetails::new();

        assert!(details.resolve_attribute(&def, &scope, "focus", false).is_none());
        assert!(details
            .resolve_attribute(&def, &scope, "highlight", false)
            .is_none());
    }

    const PROP_COLLISION_DOC: &str = r#"{
        "components": {
            "Toolbar": { "props": ["vFocus"] },
            "Menu": { "mixins": ["focusable"] }
        },
        "mixins": {
            "focusable": { "props": ["vFocus"] }
        },
        "directives": { "focus": {} }
    }"#;

    #[test]
    fn own_prop_beats_global_directive() {
        let project = load(PROP_COLLISION_DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Toolbar").unwrap();

        let found = ComponentDetails::new()
            .resolve_attribute(&def, &scope, "v-focus", false)
            .unwrap();
        assert_eq!(found.kind, AttributeKind::Prop);
        assert_eq!(found.name, "vFocus");
    }

    #[test]
    fn composed_prop_beats_global_directive() {
        let project = load(PROP_COLLISION_DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Menu").unwrap();

        let found = ComponentDetails::new()
            .resolve_attribute(&def, &scope, "v-focus", false)
            .unwrap();
        assert_eq!(found.kind, AttributeKind::Prop);
        assert_eq!(file_of(&project, &found), "mixins/focusable.js");
    }
}

// =============================================================================
// Model Option Tests
// =============================================================================

mod model {
    use super::*;

    const DOC: &str = r#"{
        "components": {
            "Toggle": {
                "props": ["value"],
                "model": { "prop": "checked", "event": "change" }
            }
        }
    }"#;

    #[test]
    fn model_prop_is_an_attribute() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Toggle").unwrap();

        let attrs = ComponentDetails::new().attributes(Some(&def), &scope, false, false);
        assert_eq!(names(&attrs), ["value", "checked"]);
        assert_eq!(attrs[1].kind, AttributeKind::Model);
    }

    #[test]
    fn model_prop_resolves_with_prefixes() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Toggle").unwrap();
        let details = ComponentDetails::new();

        let found = details.resolve_attribute(&def, &scope, ":checked.sync", false).unwrap();
        assert_eq!(found.kind, AttributeKind::Model);

        // The model event is not an attribute.
        assert!(details.resolve_attribute(&def, &scope, "@change", false).is_none());
    }
}

// =============================================================================
// Visibility Tests
// =============================================================================

mod visibility {
    use super::*;

    const DOC: &str = r#"{
        "components": {
            "Form": {
                "props": ["visible", "_secret"],
                "computed": { "summary": {} },
                "methods": { "submit": {} },
                "data": { "config": {}, "draft": {} }
            }
        }
    }"#;

    #[test]
    fn only_public_keeps_props_and_model() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Form").unwrap();
        let details = ComponentDetails::new();

        let attrs = details.attributes(Some(&def), &scope, false, false);
        assert_eq!(
            names(&attrs),
            ["visible", "_secret", "summary", "submit", "config", "draft"]
        );

        let attrs = details.attributes(Some(&def), &scope, true, false);
        assert_eq!(names(&attrs), ["visible"]);
    }

    #[test]
    fn only_public_hides_from_resolution() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Form").unwrap();
        let details = ComponentDetails::new();

        assert!(details.resolve_attribute(&def, &scope, "draft", true).is_none());
        let found = details.resolve_attribute(&def, &scope, "draft", false).unwrap();
        assert_eq!(found.kind, AttributeKind::Data);

        assert!(details.resolve_attribute(&def, &scope, "_secret", true).is_none());
        assert!(details.resolve_attribute(&def, &scope, "_secret", false).is_some());
    }

    #[test]
    fn prefixed_spellings_resolve() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Form").unwrap();
        let details = ComponentDetails::new();

        assert!(details.resolve_attribute(&def, &scope, ":visible", true).is_some());
        assert!(details
            .resolve_attribute(&def, &scope, "v-bind:visible.sync", true)
            .is_some());

        let found = details
            .resolve_attribute(&def, &scope, "@submit.native", false)
            .unwrap();
        assert_eq!(found.kind, AttributeKind::Method);
    }

    #[test]
    fn dotted_name_without_prefix_keeps_first_segment() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Form").unwrap();

        let found = ComponentDetails::new()
            .resolve_attribute(&def, &scope, "config.nested", false)
            .unwrap();
        assert_eq!(found.name, "config");
    }
}

// =============================================================================
// Name Rendering Tests
// =============================================================================

mod rendering {
    use super::*;

    const DOC: &str = r#"{
        "components": {
            "Avatar": { "props": ["user-name", "iconSize"] }
        }
    }"#;

    #[test]
    fn markup_names_are_kebab_case() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Avatar").unwrap();

        let attrs = ComponentDetails::new().attributes(Some(&def), &scope, false, true);
        assert_eq!(names(&attrs), ["user-name", "icon-size"]);
    }

    #[test]
    fn script_names_gain_camel_variants() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Avatar").unwrap();

        let attrs = ComponentDetails::new().attributes(Some(&def), &scope, false, false);
        assert_eq!(names(&attrs), ["user-name", "userName", "iconSize"]);
        assert_eq!(attrs[1].location, attrs[0].location);
    }

    #[test]
    fn either_case_resolves() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Avatar").unwrap();
        let details = ComponentDetails::new();

        assert!(details.resolve_attribute(&def, &scope, "userName", false).is_some());
        assert!(details.resolve_attribute(&def, &scope, "icon-size", false).is_some());
        assert!(details
            .resolve_attribute(&def, &scope, ":user-name.camel", false)
            .is_some());
    }
}

// =============================================================================
// Local Component Tests
// =============================================================================

mod local_components {
    use super::*;

    const DOC: &str = r#"{
        "components": {
            "Page": {
                "components": { "UserCard": "./UserCard.vue" },
                "mixins": ["widgets"]
            }
        },
        "mixins": {
            "widgets": {
                "components": { "BaseButton": {}, "IconStar": {} }
            }
        }
    }"#;

    #[test]
    fn own_come_before_composed() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Page").unwrap();

        let mut seen = Vec::new();
        let flow: ControlFlow<()> =
            ComponentDetails::new().local_components(Some(&def), &scope, |component| {
                assert_eq!(component.kind, AttributeKind::Component);
                seen.push(component.name.to_string());
                ControlFlow::Continue(())
            });
        assert!(flow.is_continue());
        assert_eq!(seen, ["UserCard", "BaseButton", "IconStar"]);
    }

    #[test]
    fn break_stops_the_walk() {
        let project = load(DOC);
        let scope = ProjectScope::new(project.definitions(), project.directives());
        let def = project.definition("Page").unwrap();

        let mut seen = Vec::new();
        let flow = ComponentDetails::new().local_components(Some(&def), &scope, |component| {
            seen.push(component.name.to_string());
            ControlFlow::Break(component.name.clone())
        });
        assert_eq!(flow, ControlFlow::Break("UserCard".into()));
        assert_eq!(seen, ["UserCard"]);
    }
}
