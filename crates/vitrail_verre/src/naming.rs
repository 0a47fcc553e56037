//! Naming conventions for Vue attributes and assets.
//!
//! Markup spells names in kebab-case while script code spells them in
//! camelCase, and template attributes additionally carry shorthand prefixes
//! (`:`, `v-bind:`, `@`, `v-on:`) and `.modifier` chains. This module
//! provides:
//! - Cached case conversion (camelCase, kebab-case, PascalCase)
//! - Attribute prefix and modifier stripping
//! - Name-variant matching for attribute resolution

use once_cell::sync::Lazy;
use phf::phf_set;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::RwLock;

use compact_str::CompactString;

// =============================================================================
// Cached Conversions
// =============================================================================

/// Cache for camelize conversions
static CAMEL_CACHE: Lazy<RwLock<FxHashMap<CompactString, CompactString>>> =
    Lazy::new(|| RwLock::new(FxHashMap::default()));

/// Cache for hyphenate conversions
static KEBAB_CACHE: Lazy<RwLock<FxHashMap<CompactString, CompactString>>> =
    Lazy::new(|| RwLock::new(FxHashMap::default()));

/// Cache for to_pascal_case conversions
static PASCAL_CACHE: Lazy<RwLock<FxHashMap<CompactString, CompactString>>> =
    Lazy::new(|| RwLock::new(FxHashMap::default()));

fn cached(
    cache: &Lazy<RwLock<FxHashMap<CompactString, CompactString>>>,
    s: &str,
    convert: fn(&str) -> CompactString,
) -> CompactString {
    if s.is_empty() {
        return CompactString::default();
    }

    {
        let map = cache.read().unwrap();
        if let Some(hit) = map.get(s) {
            return hit.clone();
        }
    }

    let result = convert(s);

    {
        let mut map = cache.write().unwrap();
        map.insert(CompactString::new(s), result.clone());
    }

    result
}

/// Convert kebab-case to camelCase. camelCase input comes back unchanged.
///
/// # Examples
/// ```
/// use vitrail_verre::naming::camelize;
///
/// assert_eq!(camelize("my-prop"), "myProp");
/// assert_eq!(camelize("myProp"), "myProp");
/// assert_eq!(camelize("foo--bar"), "fooBar");
/// ```
pub fn camelize(s: &str) -> CompactString {
    cached(&CAMEL_CACHE, s, camelize_uncached)
}

fn camelize_uncached(s: &str) -> CompactString {
    let mut result = String::with_capacity(s.len());
    let mut uppercase_next = false;

    for c in s.chars() {
        if c == '-' {
            uppercase_next = true;
        } else if uppercase_next {
            result.push(c.to_ascii_uppercase());
            uppercase_next = false;
        } else {
            result.push(c);
        }
    }

    CompactString::new(&result)
}

/// Convert camelCase or PascalCase to kebab-case. kebab-case input comes
/// back unchanged.
///
/// # Examples
/// ```
/// use vitrail_verre::naming::hyphenate;
///
/// assert_eq!(hyphenate("myProp"), "my-prop");
/// assert_eq!(hyphenate("MyComponent"), "my-component");
/// assert_eq!(hyphenate("my-prop"), "my-prop");
/// ```
pub fn hyphenate(s: &str) -> CompactString {
    cached(&KEBAB_CACHE, s, hyphenate_uncached)
}

fn hyphenate_uncached(s: &str) -> CompactString {
    let mut result = String::with_capacity(s.len() + 4);

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    CompactString::new(&result)
}

/// Uppercase the first character.
pub fn capitalize(s: &str) -> CompactString {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(s.len());
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
            CompactString::new(&result)
        }
        None => CompactString::default(),
    }
}

/// Convert any accepted spelling to PascalCase, the form registries key
/// component and mixin names under.
///
/// # Examples
/// ```
/// use vitrail_verre::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("user-card"), "UserCard");
/// assert_eq!(to_pascal_case("userCard"), "UserCard");
/// assert_eq!(to_pascal_case("UserCard"), "UserCard");
/// ```
pub fn to_pascal_case(s: &str) -> CompactString {
    cached(&PASCAL_CACHE, s, |s| capitalize(&camelize_uncached(s)))
}

/// Check if two names match when normalized (kebab vs camel comparison)
///
/// # Examples
/// ```
/// use vitrail_verre::naming::names_match;
///
/// assert!(names_match("my-prop", "myProp"));
/// assert!(names_match("foo", "foo"));
/// assert!(!names_match("myProp", "otherProp"));
/// ```
#[inline]
pub fn names_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    camelize(a) == camelize(b)
}

// =============================================================================
// Attribute Prefixes and Modifiers
// =============================================================================

/// Modifiers recognized after a bind-style prefix.
pub static BIND_MODIFIERS: phf::Set<&'static str> = phf_set! { ".prop", ".camel", ".sync" };

/// Event modifiers. A handler attribute whose chain ends in one of these is
/// complete without a value.
pub static EVENT_MODIFIERS: phf::Set<&'static str> = phf_set! {
    ".stop", ".prevent", ".capture", ".self", ".once", ".passive", ".native",
};

/// The shorthand family an attribute prefix belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributePrefix {
    /// `:` or `v-bind:`
    Bind,
    /// `@` or `v-on:`
    Event,
}

impl AttributePrefix {
    #[inline]
    pub const fn is_event(self) -> bool {
        matches!(self, AttributePrefix::Event)
    }

    /// Whether `modifier` (with its leading dot) is meaningful after this
    /// prefix. Event prefixes accept any modifier.
    pub fn allows_modifier(self, modifier: &str) -> bool {
        match self {
            AttributePrefix::Bind => BIND_MODIFIERS.contains(modifier),
            AttributePrefix::Event => true,
        }
    }
}

/// Recognized attribute prefixes, longest first so `v-bind:` wins over `:`.
pub const ATTRIBUTE_PREFIXES: &[(&str, AttributePrefix)] = &[
    ("v-bind:", AttributePrefix::Bind),
    ("v-on:", AttributePrefix::Event),
    (":", AttributePrefix::Bind),
    ("@", AttributePrefix::Event),
];

/// An attribute name with its shorthand prefix and modifier chain removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedName {
    /// The canonical name the attribute refers to.
    pub name: CompactString,
    /// The recognized prefix, when one was present.
    pub prefix: Option<AttributePrefix>,
    /// Modifier chain in source order, each with its leading dot.
    pub modifiers: SmallVec<[CompactString; 2]>,
}

/// Split an attribute into canonical name, prefix, and modifiers.
///
/// A recognized prefix must sit at the very start of the attribute and the
/// longest one wins. Text after the prefix up to the first `.` is the name,
/// the rest is the modifier chain. An attribute with no recognized prefix
/// but a dot in it still loses everything from the first dot on; a plain
/// name comes back unchanged.
///
/// # Examples
/// ```
/// use vitrail_verre::naming::strip_prefix_and_modifiers;
///
/// let stripped = strip_prefix_and_modifiers(":value.sync");
/// assert_eq!(stripped.name, "value");
/// assert_eq!(stripped.modifiers.as_slice(), [".sync"]);
///
/// assert_eq!(strip_prefix_and_modifiers("v-on:click.stop.prevent").name, "click");
/// assert_eq!(strip_prefix_and_modifiers("plain-attr").name, "plain-attr");
/// ```
pub fn strip_prefix_and_modifiers(attribute: &str) -> StrippedName {
    for (prefix, family) in ATTRIBUTE_PREFIXES {
        let Some(rest) = attribute.strip_prefix(prefix) else {
            continue;
        };
        // A bare prefix is not shorthand for anything.
        if rest.is_empty() {
            continue;
        }
        let (name, modifiers) = split_modifiers(rest);
        return StrippedName {
            name,
            prefix: Some(*family),
            modifiers,
        };
    }

    let (name, modifiers) = split_modifiers(attribute);
    StrippedName {
        name,
        prefix: None,
        modifiers,
    }
}

fn split_modifiers(text: &str) -> (CompactString, SmallVec<[CompactString; 2]>) {
    let Some(dot) = text.find('.') else {
        return (CompactString::new(text), SmallVec::new());
    };

    let mut modifiers = SmallVec::new();
    let mut rest = &text[dot..];
    while let Some(next) = rest[1..].find('.') {
        modifiers.push(CompactString::new(&rest[..=next]));
        rest = &rest[next + 1..];
    }
    modifiers.push(CompactString::new(rest));

    (CompactString::new(&text[..dot]), modifiers)
}

/// Whether an attribute is complete without a value.
///
/// True only for event-prefixed attributes whose text ends in a recognized
/// event modifier: `@submit.prevent` stands alone, `@click` and
/// `:value.sync` do not.
///
/// # Examples
/// ```
/// use vitrail_verre::naming::attribute_allows_no_value;
///
/// assert!(attribute_allows_no_value("@click.once"));
/// assert!(attribute_allows_no_value("v-on:submit.prevent"));
/// assert!(!attribute_allows_no_value("@click"));
/// assert!(!attribute_allows_no_value(":value.sync"));
/// ```
pub fn attribute_allows_no_value(attribute: &str) -> bool {
    ATTRIBUTE_PREFIXES
        .iter()
        .filter(|(_, family)| family.is_event())
        .any(|(prefix, _)| match attribute.strip_prefix(prefix) {
            Some(rest) if !rest.is_empty() => EVENT_MODIFIERS
                .iter()
                .any(|modifier| rest.ends_with(*modifier)),
            _ => false,
        })
}

// =============================================================================
// Name Variants
// =============================================================================

/// The spellings under which a template attribute may match a declared
/// member.
#[derive(Debug, Clone)]
pub struct NameVariants {
    variants: SmallVec<[CompactString; 3]>,
}

impl NameVariants {
    /// Whether a declared member name is one of the acceptable spellings.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        self.variants.iter().any(|variant| variant.as_str() == candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(CompactString::as_str)
    }
}

/// Compute the acceptable spellings for an attribute: the stripped name
/// itself plus its kebab-case and camelCase forms.
///
/// # Examples
/// ```
/// use vitrail_verre::naming::name_variants;
///
/// let variants = name_variants(":my-prop.sync");
/// assert!(variants.matches("my-prop"));
/// assert!(variants.matches("myProp"));
/// assert!(!variants.matches("my_prop"));
/// ```
pub fn name_variants(attribute: &str) -> NameVariants {
    let stripped = strip_prefix_and_modifiers(attribute);
    let mut variants: SmallVec<[CompactString; 3]> = SmallVec::new();
    for candidate in [
        stripped.name.clone(),
        hyphenate(&stripped.name),
        camelize(&stripped.name),
    ] {
        if !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    NameVariants { variants }
}

// =============================================================================
// Tests
// =============================================================================
