//! Source files, spans, and locations.
//!
//! The engine never reads source text itself; front ends hand it definitions
//! whose members carry locations expressed with these types. Spans are byte
//! offsets, half-open, and only ever compared for containment.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identifier of one source file within a [`FileSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct FileId(u32);

impl FileId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Half-open byte range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Whether `other` lies entirely inside this span.
    #[inline]
    pub const fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// A span pinned to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: FileId,
    pub span: Span,
}

impl SourceLocation {
    pub const fn new(file: FileId, span: Span) -> Self {
        Self { file, span }
    }

    /// Structural ancestry: same file and enclosing span.
    #[inline]
    pub const fn contains(&self, other: &SourceLocation) -> bool {
        self.file.as_u32() == other.file.as_u32() && self.span.contains(other.span)
    }
}

/// Interns file paths to [`FileId`]s.
#[derive(Debug, Default)]
pub struct FileSet {
    paths: Vec<CompactString>,
    ids: FxHashMap<CompactString, FileId>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `path`, allocating one on first sight.
    pub fn intern(&mut self, path: &str) -> FileId {
        if let Some(id) = self.ids.get(path) {
            return *id;
        }
        let id = FileId::new(self.paths.len() as u32);
        self.paths.push(CompactString::new(path));
        self.ids.insert(CompactString::new(path), id);
        id
    }

    pub fn get(&self, path: &str) -> Option<FileId> {
        self.ids.get(path).copied()
    }

    pub fn path(&self, id: FileId) -> Option<&str> {
        self.paths.get(id.as_u32() as usize).map(CompactString::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
