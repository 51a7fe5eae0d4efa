/// Command-line interface and run orchestration
pub mod cli;
/// Puzzle constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of boards
pub mod image;
/// Search progress reporting
pub mod progress;
/// Board snapshots and text rendering
pub mod render;
