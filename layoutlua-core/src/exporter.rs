//! Layout to Luau exporter
//!
//! Turns a [`Layout`] into a script that rebuilds the same GUI at runtime:
//! a fixed preamble creating the root `ScreenGui`, then one block per item in
//! input order. The transform is pure; the same layout and config always
//! produce byte-identical output.
//!
//! Known limitations of the default output (see [`ExportConfig`] to opt out):
//! - identifiers are not deduplicated, so two items named alike both declare
//!   the same local
//! - `text` is wrapped in `[[...]]` as-is, so content containing `]]` ends the
//!   string early
//! - color, class and image values are passed through without validation

use std::collections::HashSet;

use crate::coerce::format_number;
use crate::identifier;
use crate::luau::{self, ROOT_VAR};
use crate::types::{ExportConfig, Item, Layout};

/// Statistics from one export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Number of item blocks written
    pub items_exported: usize,
    /// Identifiers that were sanitized or derived from a fallback
    pub identifiers_altered: usize,
    /// Identifiers renamed for uniqueness or validity
    pub identifiers_renamed: usize,
    /// Texts written with a higher long-bracket level or an extra line break
    pub texts_rebracketed: usize,
}

/// Exporter instance with configuration
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Create an exporter with the given configuration
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter that produces the plain output
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Generate the script for `layout`
    pub fn export(&self, layout: &Layout) -> String {
        self.export_with_stats(layout).0
    }

    /// Generate the script for `layout`, returning export statistics
    pub fn export_with_stats(&self, layout: &Layout) -> (String, ExportStats) {
        let mut stats = ExportStats::default();
        let mut lines: Vec<String> = luau::PREAMBLE.iter().map(|l| l.to_string()).collect();

        let identifiers = self.resolve_identifiers(&layout.items, &mut stats);
        for (item, id) in layout.items.iter().zip(&identifiers) {
            if self.push_item(&mut lines, id, item) {
                stats.texts_rebracketed += 1;
            }
            stats.items_exported += 1;
        }

        (lines.join("\n"), stats)
    }

    /// Compute the script identifier of every item, in order
    fn resolve_identifiers(&self, items: &[Item], stats: &mut ExportStats) -> Vec<String> {
        let mut names = NameRegistry::new();

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let derived =
                    identifier::derive(item.name.as_deref(), item.class_name.as_deref(), index);
                if derived.altered {
                    stats.identifiers_altered += 1;
                }

                let mut name = derived.name.clone();
                if self.config.safe_identifiers {
                    name = identifier::make_valid(&name);
                }
                if self.config.unique_names {
                    name = names.claim(&name);
                }

                if name != derived.name {
                    stats.identifiers_renamed += 1;
                }
                name
            })
            .collect()
    }

    /// Append the block for one item; returns whether its text was re-bracketed
    fn push_item(&self, lines: &mut Vec<String>, id: &str, item: &Item) -> bool {
        let mut rebracketed = false;

        lines.push(String::new());
        lines.push(format!(
            "local {} = Instance.new({})",
            id,
            luau::quoted(item.class_or_default())
        ));
        lines.push(format!(
            "{}.Position = UDim2.new(0, {}, 0, {})",
            id,
            format_number(item.x),
            format_number(item.y)
        ));
        lines.push(format!(
            "{}.Size = UDim2.new(0, {}, 0, {})",
            id,
            format_number(item.w),
            format_number(item.h)
        ));

        if let Some(fill) = &item.fill {
            lines.push(format!("{}.BackgroundColor3 = {}", id, color_from_hex(fill)));
        }
        if let Some(text) = &item.text {
            let literal = if self.config.escape_long_strings {
                luau::safe_long_string(text)
            } else {
                luau::long_string(text)
            };
            rebracketed = literal != luau::long_string(text);
            lines.push(format!("{}.Text = {}", id, literal));
        }
        if let Some(color) = &item.text_color {
            lines.push(format!("{}.TextColor3 = {}", id, color_from_hex(color)));
        }
        if let Some(size) = item.font_size {
            lines.push(format!("{}.TextSize = {}", id, format_number(size)));
        }
        if let Some(image) = &item.image_id {
            lines.push(format!("{}.Image = {}", id, luau::quoted(image)));
        }

        lines.push(format!("{}.Parent = {}", id, ROOT_VAR));
        rebracketed
    }
}

/// Generate the script for `layout` with the default configuration
pub fn export(layout: &Layout) -> String {
    Exporter::with_defaults().export(layout)
}

fn color_from_hex(hex: &str) -> String {
    format!("Color3.fromHex({})", luau::quoted(hex))
}

/// Identifiers already declared in the script
struct NameRegistry {
    taken: HashSet<String>,
}

impl NameRegistry {
    fn new() -> Self {
        let mut taken: HashSet<String> =
            luau::RESERVED_GLOBALS.iter().map(|g| g.to_string()).collect();
        taken.insert(ROOT_VAR.to_string());
        Self { taken }
    }

    /// Reserve `base`, or the first free `base_2`, `base_3`, ...
    fn claim(&mut self, base: &str) -> String {
        if self.taken.insert(base.to_string()) {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{}_{}", base, n))
            .find(|candidate| self.taken.insert(candidate.clone()))
            .unwrap_or_else(|| base.to_string())
    }
}
