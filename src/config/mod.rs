// src/config/mod.rs

//! Manager configuration.
//!
//! - Define the TOML-backed data model (`model.rs`).
//! - Parse it from text or a file (`loader.rs`).

pub mod loader;
pub mod model;

pub use loader::{from_toml_str, load_from_path};
pub use model::{GraphSection, ManagerConfig, OrderingSection};
