//! Configuration management for phase-runner

mod settings;

// Re-export main types
pub use settings::{CONFIG_FILE_NAME, Config};
