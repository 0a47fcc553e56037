//! # vitrail_rosace
//!
//! Rosace - The rose window of Vitrail.
//!
//! ## Name Origin
//!
//! **Rosace** (/ʁo.zas/, French for "rose window") is the assembled picture:
//! every pane in place, readable from the floor. This crate assembles the
//! panes the other layers cut, answering what a template can actually use:
//! which attributes a component exposes, what a given attribute name
//! resolves to, and which components are locally visible.
//!
//! # Modules
//!
//! - **descriptor**: the [`AttributeDescriptor`] value type
//! - **own**: details declared directly on a definition
//! - **directives**: project-wide and file-local directive resolution
//! - **facade**: [`ComponentDetails`], the query entry points

pub mod descriptor;
pub mod directives;
pub mod facade;
pub mod own;

pub use descriptor::{AttributeDescriptor, AttributeKind};
pub use directives::{directive_attributes, resolve_directive};
pub use facade::{ComponentDetails, ProjectScope};
pub use own::{own_details, own_local_components};
