//! # Vitrail
//!
//! Vue component option resolution engine.
//!
//! This crate re-exports all vitrail sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`verre`] - Attribute names, spans, and the definition model
//! - [`plomb`] - Registries, edge providers, and the composition graph walker
//! - [`rosace`] - Attribute descriptors and the resolution facade

/// Attribute names, spans, and the definition model.
pub use vitrail_verre as verre;

/// Registries, edge providers, and the composition graph walker.
pub use vitrail_plomb as plomb;

/// Attribute descriptors and the resolution facade.
pub use vitrail_rosace as rosace;
