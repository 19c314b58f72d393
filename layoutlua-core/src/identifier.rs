//! Script identifier derivation
//!
//! Every item becomes a `local` in the generated script. Item names come from
//! a free-form editor field, so they are reduced to `[A-Za-z0-9_]` before use.

use crate::luau;

/// Replace every character outside `[A-Za-z0-9_]` with `_`
///
/// The mapping is one to one per character, so `"my name!!"` becomes
/// `"my_name__"` and a multi-byte character becomes a single underscore.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if is_identifier_char(c) { c } else { '_' })
        .collect()
}

#[inline]
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Name used when an item declares none: `<type>_<index>`, or `Item_<index>`
pub fn fallback_name(class_name: Option<&str>, index: usize) -> String {
    match class_name {
        Some(class) if !class.is_empty() => format!("{}_{}", class, index),
        _ => format!("Item_{}", index),
    }
}

/// Derive the identifier for the item at `index`
///
/// An absent or empty name falls back to [`fallback_name`] before sanitizing.
/// A name in which every character had to be replaced falls back to
/// `Item_<index>`.
pub fn derive(name: Option<&str>, class_name: Option<&str>, index: usize) -> Identifier {
    let (source, from_fallback) = match name {
        Some(n) if !n.is_empty() => (n.to_string(), false),
        _ => (fallback_name(class_name, index), true),
    };

    if !source.chars().any(is_identifier_char) {
        return Identifier {
            name: format!("Item_{}", index),
            altered: true,
        };
    }

    let sanitized = sanitize(&source);
    Identifier {
        altered: from_fallback || sanitized != source,
        name: sanitized,
    }
}

/// Identifier derived for one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The identifier as it appears in the script
    pub name: String,
    /// Whether it differs from the declared name (sanitized or defaulted)
    pub altered: bool,
}

/// Whether `name` can be used as a Luau local name as-is
pub fn is_valid(name: &str) -> bool {
    let starts_ok = name
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    starts_ok && !luau::is_keyword(name)
}

/// Prefix `_` onto identifiers Luau would reject or that shadow a script global
pub fn make_valid(name: &str) -> String {
    if is_valid(name) && !luau::shadows_script_name(name) {
        name.to_string()
    } else {
        format!("_{}", name)
    }
}
