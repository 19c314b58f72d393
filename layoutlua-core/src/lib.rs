//! LayoutLua Core Library
//!
//! This crate turns a declarative 2-D layout into a Luau script that rebuilds
//! the same GUI inside Roblox at runtime:
//! - Layout document types and tolerant decoding (JSON and YAML)
//! - Numeric coercion and identifier sanitizing
//! - The exporter itself, plus opt-in safety options
//! - Diagnostics for layouts the plain output cannot represent

pub mod coerce;
pub mod exporter;
pub mod identifier;
pub mod lint;
pub mod luau;
pub mod types;

// Re-export commonly used types
pub use exporter::{export, ExportStats, Exporter};
pub use lint::{lint, Diagnostic};
pub use types::{
    find_config, user_config_path, CanvasSize, ExportConfig, Item, Layout, LayoutError,
    CONFIG_FILE_NAME, DEFAULT_CLASS,
};
