//! Name lookup surfaces.
//!
//! Queries resolve names against whatever indices the host keeps. The two
//! traits here are that surface: one for definitions (components and mixins)
//! plus the app-wide mixin list, one for directives. [`InMemoryRegistry`]
//! implements both and is what the JSON project loader fills.
//!
//! Lookups are spelling-insensitive: definition names are keyed in
//! PascalCase and directive names compared in camelCase, so `user-card`,
//! `userCard`, and `UserCard` all reach the same entry.

use compact_str::CompactString;
use rustc_hash::FxHashMap;

use vitrail_verre::naming::{camelize, to_pascal_case};
use vitrail_verre::source::{FileId, SourceLocation};
use vitrail_verre::{DefRef, TargetRef};

/// Definition lookup plus the app-wide mixin list.
pub trait DefinitionRegistry {
    /// Definition registered under `name`, in any accepted spelling.
    fn find(&self, name: &str) -> Option<DefRef>;

    /// References registered app-wide (the `Vue.mixin(...)` calls of a
    /// project). These apply to every component, including an absent one.
    fn global_mixins(&self) -> Vec<TargetRef>;
}

/// One registered directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveDecl {
    pub name: CompactString,
    pub location: SourceLocation,
}

impl DirectiveDecl {
    pub fn new(name: impl Into<CompactString>, location: SourceLocation) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// Directive lookup, split into the project-wide register and per-file
/// local declarations.
pub trait DirectiveRegistry {
    /// Project-wide directives registered under `name`.
    fn find_global(&self, name: &str) -> Vec<DirectiveDecl>;

    /// Every project-wide directive.
    fn global_directives(&self) -> Vec<DirectiveDecl>;

    /// Directives declared in `file` and registered under `name`.
    fn find_in_file(&self, name: &str, file: FileId) -> Vec<DirectiveDecl>;

    /// Every directive declared in `file`.
    fn file_directives(&self, file: FileId) -> Vec<DirectiveDecl>;
}

/// Registry backed by hash maps, filled at project load time.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    definitions: FxHashMap<CompactString, DefRef>,
    global_mixins: Vec<TargetRef>,
    global_directives: Vec<DirectiveDecl>,
    local_directives: FxHashMap<FileId, Vec<DirectiveDecl>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under `name`. Later registrations under the
    /// same name win, matching how a runtime would re-register.
    pub fn register_definition(&mut self, name: &str, def: DefRef) {
        self.definitions.insert(to_pascal_case(name), def);
    }

    pub fn register_global_mixin(&mut self, target: TargetRef) {
        self.global_mixins.push(target);
    }

    pub fn register_global_directive(&mut self, decl: DirectiveDecl) {
        self.global_directives.push(decl);
    }

    pub fn register_local_directive(&mut self, file: FileId, decl: DirectiveDecl) {
        self.local_directives.entry(file).or_default().push(decl);
    }
}

impl DefinitionRegistry for InMemoryRegistry {
    fn find(&self, name: &str) -> Option<DefRef> {
        self.definitions.get(to_pascal_case(name).as_str()).cloned()
    }

    fn global_mixins(&self) -> Vec<TargetRef> {
        self.global_mixins.clone()
    }
}

impl DirectiveRegistry for InMemoryRegistry {
    fn find_global(&self, name: &str) -> Vec<DirectiveDecl> {
        let key = camelize(name);
        self.global_directives
            .iter()
            .filter(|decl| camelize(&decl.name) == key)
            .cloned()
            .collect()
    }

    fn global_directives(&self) -> Vec<DirectiveDecl> {
        self.global_directives.clone()
    }

    fn find_in_file(&self, name: &str, file: FileId) -> Vec<DirectiveDecl> {
        let key = camelize(name);
        self.local_directives
            .get(&file)
            .map(|decls| {
                decls
                    .iter()
                    .filter(|decl| camelize(&decl.name) == key)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn file_directives(&self, file: FileId) -> Vec<DirectiveDecl> {
        self.local_directives.get(&file).cloned().unwrap_or_default()
    }
}
