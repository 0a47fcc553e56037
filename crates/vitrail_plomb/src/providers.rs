//! Composition edges.
//!
//! Each [`EdgeProvider`] contributes one kind of outgoing edge from a
//! definition: its `mixins` array, the project's global mixins, or its
//! `extends` value. Providers first list raw targets and then map each to a
//! definition; a target that maps to nothing is dropped by the walker.
//! Provider order is resolution priority.

use vitrail_verre::{DefRef, OptionKey, TargetRef};

use crate::registry::DefinitionRegistry;

pub trait EdgeProvider {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Raw outgoing targets of `def`. Global edges may contribute even when
    /// `def` is absent.
    fn targets(&self, def: Option<&DefRef>, definitions: &dyn DefinitionRegistry)
        -> Vec<TargetRef>;

    /// Map one raw target to a definition.
    fn resolve(&self, target: &TargetRef, definitions: &dyn DefinitionRegistry) -> Option<DefRef>;
}

/// Edges from the definition's own `mixins` array.
pub struct MixinsArrayEdges;

impl EdgeProvider for MixinsArrayEdges {
    fn name(&self) -> &'static str {
        "mixins"
    }

    fn targets(
        &self,
        def: Option<&DefRef>,
        _definitions: &dyn DefinitionRegistry,
    ) -> Vec<TargetRef> {
        def.map(|def| def.composition_refs(OptionKey::Mixins).to_vec())
            .unwrap_or_default()
    }

    fn resolve(&self, target: &TargetRef, definitions: &dyn DefinitionRegistry) -> Option<DefRef> {
        definitions.find(&target.name)
    }
}

/// Edges from app-wide mixin registrations. Apply to every definition, and
/// to queries with no definition at all.
pub struct GlobalMixinEdges;

impl EdgeProvider for GlobalMixinEdges {
    fn name(&self) -> &'static str {
        "global-mixins"
    }

    fn targets(
        &self,
        _def: Option<&DefRef>,
        definitions: &dyn DefinitionRegistry,
    ) -> Vec<TargetRef> {
        definitions.global_mixins()
    }

    fn resolve(&self, target: &TargetRef, definitions: &dyn DefinitionRegistry) -> Option<DefRef> {
        definitions.find(&target.name)
    }
}

/// The edge from the definition's `extends` value.
pub struct ExtendsEdges;

impl EdgeProvider for ExtendsEdges {
    fn name(&self) -> &'static str {
        "extends"
    }

    fn targets(
        &self,
        def: Option<&DefRef>,
        _definitions: &dyn DefinitionRegistry,
    ) -> Vec<TargetRef> {
        def.map(|def| def.composition_refs(OptionKey::Extends).to_vec())
            .unwrap_or_default()
    }

    fn resolve(&self, target: &TargetRef, definitions: &dyn DefinitionRegistry) -> Option<DefRef> {
        definitions.find(&target.name)
    }
}

/// The built-in providers in priority order: local mixins, then global
/// mixins, then extends.
pub fn default_providers() -> Vec<Box<dyn EdgeProvider>> {
    vec![
        Box::new(MixinsArrayEdges),
        Box::new(GlobalMixinEdges),
        Box::new(ExtendsEdges),
    ]
}
