//! Component definition objects.
//!
//! A definition is the options object a component-defining call receives:
//! `props`, `data`, `computed`, `methods`, `model`, `components`,
//! `directives`, plus the composition options `mixins` and `extends`. The
//! engine reads definitions through the [`ComponentDefinition`] trait so any
//! front end can supply them; [`ObjectDefinition`] is the in-memory form the
//! bundled JSON adapter produces.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use compact_str::CompactString;
use rustc_hash::FxHashMap;

use crate::source::{FileId, SourceLocation, Span};

/// Identity of a parsed definition, unique within a process. Used to guard
/// against revisiting a definition during graph walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct DefinitionId(u32);

impl DefinitionId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

static NEXT_DEFINITION_ID: AtomicU32 = AtomicU32::new(0);

/// Option groups of a definition object that the engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Props,
    Data,
    Computed,
    Methods,
    Model,
    Components,
    Directives,
    Mixins,
    Extends,
}

impl OptionKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            OptionKey::Props => "props",
            OptionKey::Data => "data",
            OptionKey::Computed => "computed",
            OptionKey::Methods => "methods",
            OptionKey::Model => "model",
            OptionKey::Components => "components",
            OptionKey::Directives => "directives",
            OptionKey::Mixins => "mixins",
            OptionKey::Extends => "extends",
        }
    }

    pub fn from_key(key: &str) -> Option<OptionKey> {
        Some(match key {
            "props" => OptionKey::Props,
            "data" => OptionKey::Data,
            "computed" => OptionKey::Computed,
            "methods" => OptionKey::Methods,
            "model" => OptionKey::Model,
            "components" => OptionKey::Components,
            "directives" => OptionKey::Directives,
            "mixins" => OptionKey::Mixins,
            "extends" => OptionKey::Extends,
            _ => return None,
        })
    }

    /// Groups whose entries reference other definitions rather than declare
    /// members.
    pub const fn is_composition(self) -> bool {
        matches!(self, OptionKey::Mixins | OptionKey::Extends)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named member declared under an option group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declared {
    pub name: CompactString,
    pub location: SourceLocation,
    /// Literal string value, when the member has one (`model.prop` does).
    pub value: Option<CompactString>,
}

/// An unresolved composition reference: one `mixins` array entry or the
/// `extends` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRef {
    pub name: CompactString,
    pub location: SourceLocation,
}

/// A tolerated malformation found while reading a definition shape. Issues
/// never fail a query; the malformed part is simply absent from results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeIssue {
    pub path: CompactString,
    pub message: CompactString,
}

impl ShapeIssue {
    pub fn new(path: impl Into<CompactString>, message: impl Into<CompactString>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A parsed component definition object.
///
/// The engine never interprets member values or executes anything; it reads
/// names, locations, and composition references through this surface.
pub trait ComponentDefinition: fmt::Debug {
    /// Process-unique identity.
    fn identity(&self) -> DefinitionId;

    /// File the definition object lives in.
    fn file(&self) -> FileId;

    /// Span of the whole definition object.
    fn span(&self) -> Span;

    /// Named members declared under `option`. Empty for absent groups and
    /// for composition groups.
    fn members(&self, option: OptionKey) -> &[Declared];

    /// Raw composition references under `option` (`Mixins` or `Extends`).
    fn composition_refs(&self, option: OptionKey) -> &[TargetRef];

    /// Span of the `option` property itself, when declared.
    fn option_span(&self, option: OptionKey) -> Option<Span>;

    /// Location of the whole definition object.
    fn location(&self) -> SourceLocation {
        SourceLocation::new(self.file(), self.span())
    }
}

/// Shared handle to a definition.
pub type DefRef = Arc<dyn ComponentDefinition + Send + Sync>;

/// In-memory [`ComponentDefinition`].
#[derive(Debug)]
pub struct ObjectDefinition {
    id: DefinitionId,
    file: FileId,
    span: Span,
    members: FxHashMap<OptionKey, Vec<Declared>>,
    refs: FxHashMap<OptionKey, Vec<TargetRef>>,
    option_spans: FxHashMap<OptionKey, Span>,
}

impl ObjectDefinition {
    pub fn builder(file: FileId) -> ObjectDefinitionBuilder {
        ObjectDefinitionBuilder::new(file)
    }

    pub fn into_ref(self) -> DefRef {
        Arc::new(self)
    }
}

impl ComponentDefinition for ObjectDefinition {
    fn identity(&self) -> DefinitionId {
        self.id
    }

    fn file(&self) -> FileId {
        self.file
    }

    fn span(&self) -> Span {
        self.span
    }

    fn members(&self, option: OptionKey) -> &[Declared] {
        self.members.get(&option).map(Vec::as_slice).unwrap_or(&[])
    }

    fn composition_refs(&self, option: OptionKey) -> &[TargetRef] {
        self.refs.get(&option).map(Vec::as_slice).unwrap_or(&[])
    }

    fn option_span(&self, option: OptionKey) -> Option<Span> {
        self.option_spans.get(&option).copied()
    }
}

#[derive(Debug)]
struct BuilderEntry {
    name: CompactString,
    value: Option<CompactString>,
}

/// Builds an [`ObjectDefinition`], laying out nested synthetic spans so that
/// structural containment checks hold even when the front end has no real
/// byte offsets. Entry order within a group is preserved.
#[derive(Debug)]
pub struct ObjectDefinitionBuilder {
    file: FileId,
    base: u32,
    groups: Vec<(OptionKey, Vec<BuilderEntry>)>,
}

impl ObjectDefinitionBuilder {
    fn new(file: FileId) -> Self {
        Self {
            file,
            base: 0,
            groups: Vec::new(),
        }
    }

    /// Start the synthetic span layout at `base` instead of 0. Lets several
    /// definitions share a file without overlapping.
    pub fn at_offset(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Record an option group as declared, even if nothing gets added to it.
    pub fn declare_option(mut self, option: OptionKey) -> Self {
        self.group_mut(option);
        self
    }

    /// Add a named member under `option`.
    pub fn member(self, option: OptionKey, name: impl Into<CompactString>) -> Self {
        self.push_entry(option, name.into(), None)
    }

    /// Add a named member carrying a literal string value.
    pub fn member_with_value(
        self,
        option: OptionKey,
        name: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Self {
        self.push_entry(option, name.into(), Some(value.into()))
    }

    /// Add a composition reference under `option`.
    pub fn composition_ref(self, option: OptionKey, name: impl Into<CompactString>) -> Self {
        self.push_entry(option, name.into(), None)
    }

    fn push_entry(
        mut self,
        option: OptionKey,
        name: CompactString,
        value: Option<CompactString>,
    ) -> Self {
        self.group_mut(option).push(BuilderEntry { name, value });
        self
    }

    fn group_mut(&mut self, option: OptionKey) -> &mut Vec<BuilderEntry> {
        let index = match self.groups.iter().position(|(key, _)| *key == option) {
            Some(index) => index,
            None => {
                self.groups.push((option, Vec::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index].1
    }

    pub fn build(self) -> ObjectDefinition {
        let id = DefinitionId::new(NEXT_DEFINITION_ID.fetch_add(1, Ordering::Relaxed));

        let mut members: FxHashMap<OptionKey, Vec<Declared>> = FxHashMap::default();
        let mut refs: FxHashMap<OptionKey, Vec<TargetRef>> = FxHashMap::default();
        let mut option_spans: FxHashMap<OptionKey, Span> = FxHashMap::default();

        let def_start = self.base;
        let mut cursor = def_start + 1;

        for (option, entries) in self.groups {
            let group_start = cursor;
            cursor += 1;
            for entry in entries {
                let width = entry.name.len().max(1) as u32;
                let span = Span::new(cursor, cursor + width);
                cursor = span.end + 1;
                let location = SourceLocation::new(self.file, span);
                if option.is_composition() {
                    refs.entry(option).or_default().push(TargetRef {
                        name: entry.name,
                        location,
                    });
                } else {
                    members.entry(option).or_default().push(Declared {
                        name: entry.name,
                        location,
                        value: entry.value,
                    });
                }
            }
            option_spans.insert(option, Span::new(group_start, cursor));
            cursor += 1;
        }

        ObjectDefinition {
            id,
            file: self.file,
            span: Span::new(def_start, cursor + 1),
            members,
            refs,
            option_spans,
        }
    }
}
