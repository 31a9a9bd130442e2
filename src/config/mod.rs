//! Tagger configuration.
//!
//! - [`schema`] - The [`TaggerConfig`] structure
//! - [`loader`] - Reading it from YAML files

pub mod loader;
pub mod schema;

pub use loader::{load_config_file, load_or_default, parse_config};
pub use schema::TaggerConfig;
