//! Command-line caller for the board analyzers.
//!
//! Reads a snapshot, validates it against the physical limits of the game,
//! and prints the analyzer's report.

pub mod config;
pub mod error;
pub mod input;
pub mod render;

pub use config::{AssistantConfig, OutputFormat};
pub use error::AssistantError;
