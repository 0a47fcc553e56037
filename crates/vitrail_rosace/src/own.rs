//! Details declared directly on a definition.
//!
//! Reads the template-relevant option groups of one definition, without
//! touching the composition graph. `props` and `model` face the template;
//! `computed`, `methods`, and `data` are internals that templates may still
//! reference from within the component.

use std::ops::ControlFlow;

use vitrail_verre::{ComponentDefinition, OptionKey};

use crate::descriptor::{AttributeDescriptor, AttributeKind};

struct OptionGroup {
    key: OptionKey,
    kind: AttributeKind,
    public: bool,
}

/// Groups read by [`own_details`], in emission order.
const DETAIL_GROUPS: &[OptionGroup] = &[
    OptionGroup {
        key: OptionKey::Props,
        kind: AttributeKind::Prop,
        public: true,
    },
    OptionGroup {
        key: OptionKey::Model,
        kind: AttributeKind::Model,
        public: true,
    },
    OptionGroup {
        key: OptionKey::Computed,
        kind: AttributeKind::Computed,
        public: false,
    },
    OptionGroup {
        key: OptionKey::Methods,
        kind: AttributeKind::Method,
        public: false,
    },
    OptionGroup {
        key: OptionKey::Data,
        kind: AttributeKind::Data,
        public: false,
    },
];

#[inline]
fn conventionally_private(name: &str) -> bool {
    name.starts_with('_') || name.starts_with('$')
}

/// Attributes declared directly on `def`.
///
/// `filter` accepts or rejects names. `only_public` keeps the public groups
/// and drops `_`/`$`-prefixed names. `stop_on_first` returns after the first
/// accepted descriptor, for resolution.
///
/// The `model` group emits a single descriptor named by the literal value of
/// its `prop` entry, pointing at that entry's declaration.
pub fn own_details<F>(
    def: &dyn ComponentDefinition,
    filter: F,
    only_public: bool,
    stop_on_first: bool,
) -> Vec<AttributeDescriptor>
where
    F: Fn(&str) -> bool,
{
    let mut result = Vec::new();

    for group in DETAIL_GROUPS {
        if only_public && !group.public {
            continue;
        }

        if group.key == OptionKey::Model {
            let prop = def
                .members(OptionKey::Model)
                .iter()
                .find(|member| member.name == "prop");
            if let Some(member) = prop {
                if let Some(value) = &member.value {
                    if accepts(&filter, value, only_public) {
                        result.push(AttributeDescriptor::new(
                            value.clone(),
                            Some(member.location),
                            group.kind,
                            group.public,
                        ));
                        if stop_on_first {
                            return result;
                        }
                    }
                }
            }
            continue;
        }

        for member in def.members(group.key) {
            if !accepts(&filter, &member.name, only_public) {
                continue;
            }
            result.push(AttributeDescriptor::new(
                member.name.clone(),
                Some(member.location),
                group.kind,
                group.public,
            ));
            if stop_on_first {
                return result;
            }
        }
    }

    result
}

#[inline]
fn accepts<F: Fn(&str) -> bool>(filter: &F, name: &str, only_public: bool) -> bool {
    if only_public && conventionally_private(name) {
        return false;
    }
    filter(name)
}

/// Visit the `components` entries declared directly on `def`, in
/// declaration order. `Break` is returned as-is.
pub fn own_local_components<B, V>(def: &dyn ComponentDefinition, mut visitor: V) -> ControlFlow<B>
where
    V: FnMut(&AttributeDescriptor) -> ControlFlow<B>,
{
    for member in def.members(OptionKey::Components) {
        visitor(&AttributeDescriptor::new(
            member.name.clone(),
            Some(member.location),
            AttributeKind::Component,
            true,
        ))?;
    }
    ControlFlow::Continue(())
}
