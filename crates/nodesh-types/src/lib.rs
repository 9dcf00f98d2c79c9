//! Foundation types for nodesh.
//!
//! Shared by the terminal engine and the binary: error types, shell settings
//! loaded from TOML, and the running-configuration format replayed at startup.

pub mod config;
pub mod error;
pub mod running_config;
