//! Query entry points.
//!
//! [`ComponentDetails`] owns the composition edge order; everything else a
//! query touches comes in through a [`ProjectScope`], so instances carry no
//! project state and queries stay read-only and re-entrant.

use std::ops::ControlFlow;

use vitrail_plomb::providers::{default_providers, EdgeProvider};
use vitrail_plomb::registry::{DefinitionRegistry, DirectiveRegistry};
use vitrail_plomb::walk::walk_composed;
use vitrail_verre::naming::{camelize, hyphenate, name_variants};
use vitrail_verre::DefRef;

use crate::descriptor::AttributeDescriptor;
use crate::directives::{directive_attributes, resolve_directive};
use crate::own::{own_details, own_local_components};

/// The read-only lookup surfaces one query runs against.
#[derive(Clone, Copy)]
pub struct ProjectScope<'a> {
    pub definitions: &'a dyn DefinitionRegistry,
    pub directives: &'a dyn DirectiveRegistry,
}

impl<'a> ProjectScope<'a> {
    pub fn new(
        definitions: &'a dyn DefinitionRegistry,
        directives: &'a dyn DirectiveRegistry,
    ) -> Self {
        Self {
            definitions,
            directives,
        }
    }
}

/// Answers what a component's template can use.
///
/// Construction fixes the edge provider order; the default is local mixins,
/// global mixins, then extends.
pub struct ComponentDetails {
    providers: Vec<Box<dyn EdgeProvider>>,
}

impl Default for ComponentDetails {
    fn default() -> Self {
        Self {
            providers: default_providers(),
        }
    }
}

impl ComponentDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_providers(providers: Vec<Box<dyn EdgeProvider>>) -> Self {
        Self { providers }
    }

    /// Every attribute visible on `def`: its own details, its usable
    /// directives, and the details of everything composed into it, in
    /// discovery order. Duplicate names are kept.
    ///
    /// In markup (`xml_context`) every name is rendered kebab-case. In
    /// script contexts a kebab-case name additionally gets a camelCase
    /// variant, since both spellings reach the declaration.
    pub fn attributes(
        &self,
        def: Option<&DefRef>,
        scope: &ProjectScope<'_>,
        only_public: bool,
        xml_context: bool,
    ) -> Vec<AttributeDescriptor> {
        let mut found = Vec::new();

        if let Some(def) = def {
            found.extend(own_details(def.as_ref(), |_| true, only_public, false));
            found.extend(directive_attributes(def.as_ref(), scope));
        }

        let _: ControlFlow<()> =
            walk_composed(def, &self.providers, scope.definitions, |reached| {
                found.extend(own_details(reached.as_ref(), |_| true, only_public, false));
                ControlFlow::Continue(())
            });

        tracing::debug!(count = found.len(), xml_context, "collected attributes");

        let mut result = Vec::with_capacity(found.len());
        for descriptor in found {
            if xml_context {
                let kebab = hyphenate(&descriptor.name);
                result.push(descriptor.with_name(kebab));
            } else if descriptor.name.contains('-') {
                let camel = camelize(&descriptor.name);
                let variant = descriptor.with_name(camel);
                result.push(descriptor);
                result.push(variant);
            } else {
                result.push(descriptor);
            }
        }
        result
    }

    /// Resolve one template attribute against `def`.
    ///
    /// Own details win, then composed definitions in discovery order, then
    /// directives. The attribute may be spelled with any recognized prefix,
    /// modifiers, and either case.
    pub fn resolve_attribute(
        &self,
        def: &DefRef,
        scope: &ProjectScope<'_>,
        attribute: &str,
        only_public: bool,
    ) -> Option<AttributeDescriptor> {
        let variants = name_variants(attribute);

        let own = own_details(
            def.as_ref(),
            |name| variants.matches(name),
            only_public,
            true,
        );
        if let Some(found) = own.into_iter().next() {
            return Some(found);
        }

        let walk = walk_composed(Some(def), &self.providers, scope.definitions, |reached| {
            let found = own_details(
                reached.as_ref(),
                |name| variants.matches(name),
                only_public,
                true,
            );
            match found.into_iter().next() {
                Some(found) => ControlFlow::Break(found),
                None => ControlFlow::Continue(()),
            }
        });
        if let ControlFlow::Break(found) = walk {
            tracing::debug!(attribute, "resolved through composition");
            return Some(found);
        }

        resolve_directive(def.as_ref(), attribute, scope)
    }

    /// Visit the components locally visible to `def`: its own `components`
    /// entries first, then those of everything composed into it. `Break`
    /// stops the traversal and is returned as-is.
    pub fn local_components<B, V>(
        &self,
        def: Option<&DefRef>,
        scope: &ProjectScope<'_>,
        mut visitor: V,
    ) -> ControlFlow<B>
    where
        V: FnMut(&AttributeDescriptor) -> ControlFlow<B>,
    {
        if let Some(def) = def {
            own_local_components(def.as_ref(), &mut visitor)?;
        }
        walk_composed(def, &self.providers, scope.definitions, |reached| {
            own_local_components(reached.as_ref(), &mut visitor)
        })
    }
}
