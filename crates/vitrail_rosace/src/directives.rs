//! Directive resolution.
//!
//! Directives come from two registers: the project-wide one (app-level
//! `directive(...)` registrations) and declarations nested under a
//! definition's own `directives` option, which are visible only inside that
//! definition's file. Locals never travel through mixins or extends. The
//! rendered attribute name is always `v-` plus the kebab-case directive
//! name.

use compact_str::CompactString;

use vitrail_plomb::registry::DirectiveDecl;
use vitrail_verre::naming::hyphenate;
use vitrail_verre::{ComponentDefinition, OptionKey, SourceLocation};

use crate::descriptor::{AttributeDescriptor, AttributeKind};
use crate::facade::ProjectScope;

fn directive_descriptor(decl: &DirectiveDecl) -> AttributeDescriptor {
    let mut name = CompactString::new("v-");
    name.push_str(&hyphenate(&decl.name));
    AttributeDescriptor::new(name, Some(decl.location), AttributeKind::Directive, true)
}

/// Span of the definition's own `directives` property, when declared.
fn directives_anchor(def: &dyn ComponentDefinition) -> Option<SourceLocation> {
    def.option_span(OptionKey::Directives)
        .map(|span| SourceLocation::new(def.file(), span))
}

/// Every directive usable from `def`'s template: all project-wide ones plus
/// the locals nested under its own `directives` property.
pub fn directive_attributes(
    def: &dyn ComponentDefinition,
    scope: &ProjectScope<'_>,
) -> Vec<AttributeDescriptor> {
    let mut result: Vec<AttributeDescriptor> = scope
        .directives
        .global_directives()
        .iter()
        .map(directive_descriptor)
        .collect();

    if let Some(anchor) = directives_anchor(def) {
        result.extend(
            scope
                .directives
                .file_directives(def.file())
                .iter()
                .filter(|decl| anchor.contains(&decl.location))
                .map(directive_descriptor),
        );
    }

    result
}

/// Resolve a `v-`-prefixed attribute to a directive declaration. The
/// project-wide register wins over a same-named local.
pub fn resolve_directive(
    def: &dyn ComponentDefinition,
    attribute: &str,
    scope: &ProjectScope<'_>,
) -> Option<AttributeDescriptor> {
    let search = attribute.strip_prefix("v-")?;
    if search.is_empty() {
        return None;
    }

    if let Some(decl) = scope.directives.find_global(search).into_iter().next() {
        return Some(directive_descriptor(&decl));
    }

    let anchor = directives_anchor(def)?;
    scope
        .directives
        .find_in_file(search, def.file())
        .into_iter()
        .find(|decl| anchor.contains(&decl.location))
        .map(|decl| directive_descriptor(&decl))
}
