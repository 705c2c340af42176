//! Cleaning stages for the scrub pipeline.
//!
//! Each stage is a pure function from (table, context) to a new table; none
//! mutates its input or keeps state across invocations. Composition is by
//! table-in/table-out contracts only, in this required order:
//!
//! - **infer**: field type map from one sample row
//! - **missing**: sentinel detection and drop/impute/flag handling
//! - **clean**: per-type canonicalization of raw values
//! - **dedupe**: exact and key-based duplicate removal
//! - **features**: derived columns (days since joined, spending category, ...)
//! - **validate**: schema and logic row predicates
//!
//! `pipeline` wires the stages together for callers that want the whole run.

pub mod clean;
pub mod datetime;
pub mod dedupe;
pub mod features;
pub mod infer;
pub mod missing;
pub mod numwords;
pub mod pipeline;
pub mod validate;

pub use clean::{clean_value, clean_values};
pub use dedupe::{deduplicate_by_keys, deduplicate_exact};
pub use features::{derive_features, derive_features_at};
pub use infer::infer_types;
pub use missing::{is_missing, resolve_missing};
pub use pipeline::{PipelineOptions, PipelineReport, run_pipeline};
pub use validate::{validate_rows, validate_rows_at};
