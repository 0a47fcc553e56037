//! JSON project loading.
//!
//! A project document carries everything the registries need:
//!
//! ```json
//! {
//!   "components": { "UserCard": { "props": ["name"], "mixins": ["clickable"] } },
//!   "mixins": { "clickable": { "methods": { "click": {} } } },
//!   "globalMixins": ["tracking"],
//!   "directives": { "focus": {} }
//! }
//! ```
//!
//! `components` and `mixins` entries are definition objects (see the verre
//! JSON adapter); `globalMixins` lists mixin names registered app-wide;
//! `directives` registers project-wide directives. Each definition's own
//! `directives` members are additionally registered as file-local
//! directives. Malformed pieces are skipped and collected as issues; only an
//! unreadable document is an error.

use std::path::Path;

use compact_str::CompactString;
use serde_json::Value;
use thiserror::Error;

use vitrail_verre::json::definition_from_json;
use vitrail_verre::source::FileSet;
use vitrail_verre::{DefRef, OptionKey, ShapeIssue, TargetRef};

use crate::registry::{DefinitionRegistry, DirectiveDecl, DirectiveRegistry, InMemoryRegistry};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to read project file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid project document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("project document must be a JSON object")]
    NotAnObject,
}

/// A loaded project: interned files, filled registries, and the soft issues
/// found along the way.
#[derive(Debug)]
pub struct Project {
    files: FileSet,
    registry: InMemoryRegistry,
    components: Vec<CompactString>,
    issues: Vec<ShapeIssue>,
}

impl Project {
    pub fn from_path(path: &Path) -> Result<Project, ProjectError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Project, ProjectError> {
        let document: Value = serde_json::from_str(text)?;
        let root = document.as_object().ok_or(ProjectError::NotAnObject)?;

        let mut files = FileSet::new();
        let mut registry = InMemoryRegistry::new();
        let mut components = Vec::new();
        let mut issues = Vec::new();

        if let Some(entry) = root.get("components") {
            match entry.as_object() {
                Some(map) => {
                    for (name, value) in map {
                        let path = format!("components/{name}.vue");
                        if let Some(def) = load_definition(
                            &mut files,
                            &mut registry,
                            &mut issues,
                            &format!("components.{name}"),
                            &path,
                            value,
                        ) {
                            registry.register_definition(name, def);
                            components.push(CompactString::new(name));
                        }
                    }
                }
                None => issues.push(ShapeIssue::new("components", "expected an object")),
            }
        }

        if let Some(entry) = root.get("mixins") {
            match entry.as_object() {
                Some(map) => {
                    for (name, value) in map {
                        let path = format!("mixins/{name}.js");
                        if let Some(def) = load_definition(
                            &mut files,
                            &mut registry,
                            &mut issues,
                            &format!("mixins.{name}"),
                            &path,
                            value,
                        ) {
                            registry.register_definition(name, def);
                        }
                    }
                }
                None => issues.push(ShapeIssue::new("mixins", "expected an object")),
            }
        }

        if let Some(entry) = root.get("globalMixins") {
            match entry.as_array() {
                Some(names) => {
                    for (index, name) in names.iter().enumerate() {
                        match name.as_str() {
                            Some(name) => {
                                let target = match registry.find(name) {
                                    Some(def) => TargetRef {
                                        name: CompactString::new(name),
                                        location: def.location(),
                                    },
                                    // Registered but undefined; the walker
                                    // drops it when it fails to resolve.
                                    None => TargetRef {
                                        name: CompactString::new(name),
                                        location: vitrail_verre::SourceLocation::new(
                                            files.intern("globals.js"),
                                            vitrail_verre::Span::new(0, 0),
                                        ),
                                    },
                                };
                                registry.register_global_mixin(target);
                            }
                            None => issues.push(ShapeIssue::new(
                                format!("globalMixins[{index}]"),
                                "expected a mixin name",
                            )),
                        }
                    }
                }
                None => issues.push(ShapeIssue::new("globalMixins", "expected an array")),
            }
        }

        if let Some(entry) = root.get("directives") {
            match entry.as_object() {
                Some(map) => {
                    let file = files.intern("directives.js");
                    let mut offset = 0;
                    for name in map.keys() {
                        let width = name.len().max(1) as u32;
                        let span = vitrail_verre::Span::new(offset, offset + width);
                        offset = span.end + 1;
                        registry.register_global_directive(DirectiveDecl::new(
                            name.as_str(),
                            vitrail_verre::SourceLocation::new(file, span),
                        ));
                    }
                }
                None => issues.push(ShapeIssue::new("directives", "expected an object")),
            }
        }

        Ok(Project {
            files,
            registry,
            components,
            issues,
        })
    }

    /// Definition registered under `name`, in any accepted spelling.
    pub fn definition(&self, name: &str) -> Option<DefRef> {
        self.registry.find(name)
    }

    /// Component names as written in the document.
    pub fn component_names(&self) -> &[CompactString] {
        &self.components
    }

    pub fn definitions(&self) -> &dyn DefinitionRegistry {
        &self.registry
    }

    pub fn directives(&self) -> &dyn DirectiveRegistry {
        &self.registry
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }

    /// Soft issues collected while loading. Never fatal.
    pub fn issues(&self) -> &[ShapeIssue] {
        &self.issues
    }
}

fn load_definition(
    files: &mut FileSet,
    registry: &mut InMemoryRegistry,
    issues: &mut Vec<ShapeIssue>,
    owner: &str,
    path: &str,
    value: &Value,
) -> Option<DefRef> {
    let file = files.intern(path);
    match definition_from_json(file, value) {
        Ok((def, shape_issues)) => {
            issues.extend(shape_issues.into_iter().map(|issue| {
                ShapeIssue::new(format!("{owner}.{}", issue.path), issue.message)
            }));
            let def = def.into_ref();
            for member in def.members(OptionKey::Directives) {
                registry.register_local_directive(
                    file,
                    DirectiveDecl::new(member.name.clone(), member.location),
                );
            }
            Some(def)
        }
        Err(error) => {
            issues.push(ShapeIssue::new(owner, error.to_string()));
            None
        }
    }
}
