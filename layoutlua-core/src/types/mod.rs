//! Layout document and export configuration types

mod config;
mod layout;

pub use config::*;
pub use layout::*;
