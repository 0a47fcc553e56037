//! # vitrail_verre
//!
//! Verre - The glass of Vitrail.
//!
//! ## Name Origin
//!
//! **Verre** (/vɛʁ/, French for "glass") is the raw material every window is
//! cut from. This crate holds the material layer of Vitrail: source files and
//! spans, the naming conventions Vue templates and scripts spell attributes
//! in, and the parser-agnostic shape of a component definition object.
//!
//! # Modules
//!
//! - **source**: file ids, spans, and locations
//! - **naming**: case conversion, attribute prefixes and modifiers
//! - **def**: the [`ComponentDefinition`] trait and its in-memory form
//! - **json**: adapter building definitions from serialized option objects

pub mod def;
pub mod json;
pub mod naming;
pub mod source;

pub use def::{
    ComponentDefinition, Declared, DefRef, DefinitionId, ObjectDefinition,
    ObjectDefinitionBuilder, OptionKey, ShapeIssue, TargetRef,
};
pub use json::{definition_from_json, AdapterError};
pub use naming::{
    attribute_allows_no_value, camelize, capitalize, hyphenate, name_variants, names_match,
    strip_prefix_and_modifiers, to_pascal_case, AttributePrefix, NameVariants, StrippedName,
};
pub use source::{FileId, FileSet, SourceLocation, Span};

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};
