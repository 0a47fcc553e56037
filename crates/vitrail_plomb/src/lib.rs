//! # vitrail_plomb
//!
//! Plomb - The lead caming of Vitrail.
//!
//! ## Name Origin
//!
//! **Plomb** (/plɔ̃/, French for "lead") is the metal strip that joins the
//! glass pieces of a window into one picture. This crate joins component
//! definitions the same way: it models the `mixins`/`extends`/global-mixin
//! edges between them, walks the resulting graph breadth-first without
//! falling into cycles, and keeps the registries a project resolves names
//! through.
//!
//! # Modules
//!
//! - **providers**: the [`EdgeProvider`] trait and the three built-in edges
//! - **walk**: the cycle-safe breadth-first walker
//! - **registry**: definition and directive lookup surfaces
//! - **project**: JSON project loading

pub mod project;
pub mod providers;
pub mod registry;
pub mod walk;

pub use project::{Project, ProjectError};
pub use providers::{
    default_providers, EdgeProvider, ExtendsEdges, GlobalMixinEdges, MixinsArrayEdges,
};
pub use registry::{DefinitionRegistry, DirectiveDecl, DirectiveRegistry, InMemoryRegistry};
pub use walk::walk_composed;
