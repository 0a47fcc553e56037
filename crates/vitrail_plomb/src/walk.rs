//! Breadth-first walk over the composition graph.
//!
//! The graph is implicit: edges come from the provider list, in order, and
//! nodes are discovered as targets resolve. A visited set keyed on
//! definition identity keeps cyclic `mixins`/`extends` chains finite, and
//! the visitor runs exactly once per reachable definition, in discovery
//! order. The root itself is never visited.

use std::collections::VecDeque;
use std::ops::ControlFlow;

use rustc_hash::FxHashSet;

use vitrail_verre::{DefRef, DefinitionId};

use crate::providers::EdgeProvider;
use crate::registry::DefinitionRegistry;

/// Walk every definition composed into `root`.
///
/// `root` may be absent; global edges still contribute. The visitor's
/// `Break` stops the whole walk immediately and is returned as-is, so a
/// caller can tell "found and stopped" from "ran out of graph":
///
/// ```
/// use std::ops::ControlFlow;
/// use vitrail_plomb::{default_providers, walk_composed, InMemoryRegistry};
///
/// let registry = InMemoryRegistry::new();
/// let flow: ControlFlow<u32> =
///     walk_composed(None, &default_providers(), &registry, |_| ControlFlow::Break(7));
/// assert_eq!(flow, ControlFlow::Continue(())); // nothing reachable, nothing found
/// ```
pub fn walk_composed<B, V>(
    root: Option<&DefRef>,
    providers: &[Box<dyn EdgeProvider>],
    definitions: &dyn DefinitionRegistry,
    mut visitor: V,
) -> ControlFlow<B>
where
    V: FnMut(&DefRef) -> ControlFlow<B>,
{
    let mut visited: FxHashSet<DefinitionId> = FxHashSet::default();
    let mut queue: VecDeque<Option<DefRef>> = VecDeque::new();

    queue.push_back(root.cloned());
    if let Some(def) = root {
        visited.insert(def.identity());
    }

    while let Some(current) = queue.pop_front() {
        for provider in providers {
            for target in provider.targets(current.as_ref(), definitions) {
                let Some(resolved) = provider.resolve(&target, definitions) else {
                    tracing::trace!(
                        provider = provider.name(),
                        target = %target.name,
                        "composition target did not resolve"
                    );
                    continue;
                };
                if !visited.insert(resolved.identity()) {
                    continue;
                }
                tracing::debug!(
                    provider = provider.name(),
                    target = %target.name,
                    "discovered composed definition"
                );
                visitor(&resolved)?;
                queue.push_back(Some(resolved));
            }
        }
    }

    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::default_providers;
    use crate::registry::InMemoryRegistry;
    use vitrail_verre::{FileId, ObjectDefinition, OptionKey};

    fn register(registry: &mut InMemoryRegistry, name: &str, mixins: &[&str]) -> DefRef {
        let mut builder = ObjectDefinition::builder(FileId::new(0)).member(OptionKey::Props, name);
        for mixin in mixins {
            builder = builder.composition_ref(OptionKey::Mixins, *mixin);
        }
        let def = builder.build().into_ref();
        registry.register_definition(name, def.clone());
        def
    }

    fn visit_order(root: &DefRef, registry: &InMemoryRegistry) -> Vec<String> {
        let mut order = Vec::new();
        let flow: ControlFlow<()> =
            walk_composed(Some(root), &default_providers(), registry, |def| {
                order.push(def.members(OptionKey::Props)[0].name.to_string());
                ControlFlow::Continue(())
            });
        assert_eq!(flow, ControlFlow::Continue(()));
        order
    }

    #[test]
    fn test_breadth_first_order() {
        let mut registry = InMemoryRegistry::new();
        register(&mut registry, "d", &[]);
        register(&mut registry, "c", &["d"]);
        register(&mut registry, "b", &["d"]);
        let root = register(&mut registry, "a", &["b", "c"]);

        assert_eq!(visit_order(&root, &registry), ["b", "c", "d"]);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut registry = InMemoryRegistry::new();
        register(&mut registry, "x", &["y"]);
        register(&mut registry, "y", &["x"]);
        let root = register(&mut registry, "r", &["x"]);

        assert_eq!(visit_order(&root, &registry), ["x", "y"]);
    }

    #[test]
    fn test_self_mixin_not_revisited() {
        let mut registry = InMemoryRegistry::new();
        let root = register(&mut registry, "selfish", &["selfish"]);
        assert!(visit_order(&root, &registry).is_empty());
    }

    #[test]
    fn test_diamond_visited_once() {
        let mut registry = InMemoryRegistry::new();
        register(&mut registry, "shared", &[]);
        register(&mut registry, "left", &["shared"]);
        register(&mut registry, "right", &["shared"]);
        let root = register(&mut registry, "top", &["left", "right"]);

        assert_eq!(visit_order(&root, &registry), ["left", "right", "shared"]);
    }

    #[test]
    fn test_unresolved_targets_skipped() {
        let mut registry = InMemoryRegistry::new();
        register(&mut registry, "real", &[]);
        let root = register(&mut registry, "a", &["ghost", "real"]);

        assert_eq!(visit_order(&root, &registry), ["real"]);
    }

    #[test]
    fn test_break_stops_walk() {
        let mut registry = InMemoryRegistry::new();
        register(&mut registry, "first", &[]);
        register(&mut registry, "second", &[]);
        let root = register(&mut registry, "a", &["first", "second"]);

        let mut seen = Vec::new();
        let flow = walk_composed(Some(&root), &default_providers(), &registry, |def| {
            let name = def.members(OptionKey::Props)[0].name.clone();
            seen.push(name.clone());
            if name == "first" {
                ControlFlow::Break(name)
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(flow, ControlFlow::Break("first".into()));
        assert_eq!(seen, ["first"]);
    }

    #[test]
    fn test_absent_root_reaches_global_mixins() {
        let mut registry = InMemoryRegistry::new();
        let tracker = register(&mut registry, "tracker", &[]);
        registry.register_global_mixin(vitrail_verre::TargetRef {
            name: "tracker".into(),
            location: tracker.location(),
        });

        let mut seen = Vec::new();
        let flow: ControlFlow<()> = walk_composed(None, &default_providers(), &registry, |def| {
            seen.push(def.members(OptionKey::Props)[0].name.to_string());
            ControlFlow::Continue(())
        });
        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(seen, ["tracker"]);
    }

    #[test]
    fn test_extends_lower_priority_than_mixins() {
        let mut registry = InMemoryRegistry::new();
        register(&mut registry, "base", &[]);
        register(&mut registry, "mixed", &[]);
        let root = ObjectDefinition::builder(FileId::new(0))
            .member(OptionKey::Props, "root")
            .composition_ref(OptionKey::Mixins, "mixed")
            .composition_ref(OptionKey::Extends, "base")
            .build()
            .into_ref();

        let mut order = Vec::new();
        let flow: ControlFlow<()> =
            walk_composed(Some(&root), &default_providers(), &registry, |def| {
                order.push(def.members(OptionKey::Props)[0].name.to_string());
                ControlFlow::Continue(())
            });
        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(order, ["mixed", "base"]);
    }
}
