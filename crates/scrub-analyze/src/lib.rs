//! Read-only analytics over cleaned tables.
//!
//! Consumers of the pipeline output, not transform stages: nothing here
//! returns a modified table, only summaries and flagged subsets.

pub mod outliers;
pub mod stats;

pub use outliers::{check_outlier_field, detect_outliers_threshold, detect_outliers_zscore};
pub use stats::{FieldSummary, summary_stats};
