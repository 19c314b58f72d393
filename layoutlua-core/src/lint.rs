//! Layout diagnostics
//!
//! Reports the cases where the plain exporter output is known to be wrong,
//! without changing that output. Useful before an export, or to decide which
//! [`ExportConfig`](crate::ExportConfig) options a layout needs.

use std::collections::HashMap;
use std::fmt;

use crate::identifier;
use crate::luau;
use crate::types::Layout;

/// A problem found in one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Identifier already declared by an earlier item
    DuplicateIdentifier {
        index: usize,
        identifier: String,
        first_index: usize,
    },

    /// Identifier shadows the root variable or a global the script uses
    ShadowsGlobal { index: usize, identifier: String },

    /// Identifier starts with a digit or is a Luau keyword
    InvalidIdentifier { index: usize, identifier: String },

    /// Text contains a sequence that ends a `[[...]]` string early
    UnterminatedText { index: usize },
}

impl Diagnostic {
    /// Index of the offending item
    pub fn index(&self) -> usize {
        match self {
            Self::DuplicateIdentifier { index, .. }
            | Self::ShadowsGlobal { index, .. }
            | Self::InvalidIdentifier { index, .. }
            | Self::UnterminatedText { index } => *index,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateIdentifier {
                index,
                identifier,
                first_index,
            } => write!(
                f,
                "item {}: identifier '{}' already declared by item {}",
                index, identifier, first_index
            ),
            Self::ShadowsGlobal { index, identifier } => write!(
                f,
                "item {}: identifier '{}' shadows a name the script relies on",
                index, identifier
            ),
            Self::InvalidIdentifier { index, identifier } => {
                write!(f, "item {}: '{}' is not a valid Luau identifier", index, identifier)
            }
            Self::UnterminatedText { index } => {
                write!(f, "item {}: text contains ']]' and would end the string early", index)
            }
        }
    }
}

/// Inspect a layout for problems in the plain exporter output
///
/// Diagnostics are ordered by item index.
pub fn lint(layout: &Layout) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (index, item) in layout.items.iter().enumerate() {
        let id = identifier::derive(item.name.as_deref(), item.class_name.as_deref(), index).name;

        if luau::shadows_script_name(&id) {
            diagnostics.push(Diagnostic::ShadowsGlobal {
                index,
                identifier: id.clone(),
            });
        } else if let Some(&first_index) = first_seen.get(&id) {
            diagnostics.push(Diagnostic::DuplicateIdentifier {
                index,
                identifier: id.clone(),
                first_index,
            });
        } else {
            first_seen.insert(id.clone(), index);
        }

        if !identifier::is_valid(&id) {
            diagnostics.push(Diagnostic::InvalidIdentifier { index, identifier: id });
        }

        if item.text.as_deref().is_some_and(luau::breaks_long_string) {
            diagnostics.push(Diagnostic::UnterminatedText { index });
        }
    }

    diagnostics
}
