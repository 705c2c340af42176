//! File-format boundary for the scrub pipeline.
//!
//! Turns raw CSV/JSON bytes into in-memory tables and writes cleaned tables
//! back out. The pipeline crates never touch bytes or paths; everything
//! format-shaped lives here.

pub mod export;
pub mod loader;

pub use export::{export_csv, export_json};
pub use loader::load_table;
