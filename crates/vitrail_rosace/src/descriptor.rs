//! Attribute descriptors.
//!
//! The currency of every query: an immutable record of one attribute a
//! template may use, where it was declared, and which option group it came
//! from. Descriptors are never merged; two declarations of the same name
//! stay two descriptors and resolution order decides which one wins.

use compact_str::CompactString;
use serde::Serialize;

use vitrail_verre::SourceLocation;

/// The option group an attribute came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKind {
    Prop,
    Data,
    Computed,
    Method,
    Model,
    Component,
    Directive,
}

impl AttributeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            AttributeKind::Prop => "prop",
            AttributeKind::Data => "data",
            AttributeKind::Computed => "computed",
            AttributeKind::Method => "method",
            AttributeKind::Model => "model",
            AttributeKind::Component => "component",
            AttributeKind::Directive => "directive",
        }
    }
}

/// One attribute visible on a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDescriptor {
    /// Canonical name, free of shorthand prefixes and modifiers. Directive
    /// names keep their rendered `v-` head.
    pub name: CompactString,
    /// Declaring location, when one is known.
    pub location: Option<SourceLocation>,
    pub kind: AttributeKind,
    /// Whether the attribute belongs to the component's outward surface
    /// (props and model) rather than its internals.
    pub public: bool,
}

impl AttributeDescriptor {
    pub fn new(
        name: impl Into<CompactString>,
        location: Option<SourceLocation>,
        kind: AttributeKind,
        public: bool,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            kind,
            public,
        }
    }

    /// A respelled copy that keeps the declaring location.
    pub fn with_name(&self, name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            location: self.location,
            kind: self.kind,
            public: self.public,
        }
    }

    #[inline]
    pub fn is_directive(&self) -> bool {
        self.kind == AttributeKind::Directive
    }
}
