//! Whole-pipeline composition.
//!
//! Runs the stages in their required order over one in-memory table:
//! missing-value resolution, value cleaning, deduplication, feature
//! derivation, row validation. The field type map is inferred once by the
//! caller and used unchanged throughout; no stage re-infers.

use scrub_model::{FieldTypeMap, MissingStrategy, Table};
use tracing::info;

use crate::clean::clean_values;
use crate::dedupe::{deduplicate_by_keys, deduplicate_exact};
use crate::features::derive_features;
use crate::missing::resolve_missing;
use crate::validate::validate_rows;

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub strategy: MissingStrategy,
    /// Project the table (and the type map) onto these fields before any
    /// stage runs. Empty means all fields.
    pub selected_fields: Vec<String>,
    pub dedupe: bool,
    /// When non-empty, dedupe on this composite key instead of exact row
    /// equality.
    pub dedupe_keys: Vec<String>,
    pub required_fields: Vec<String>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            strategy: MissingStrategy::Impute,
            selected_fields: Vec::new(),
            dedupe: true,
            dedupe_keys: Vec::new(),
            required_fields: Vec::new(),
        }
    }
}

/// What the run did, for caller-facing reporting.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PipelineReport {
    pub original_rows: usize,
    pub cleaned_rows: usize,
    pub duplicates_removed: usize,
    pub fields_processed: usize,
    pub strategy: String,
}

/// Run the full cleaning pipeline. Pure: the input table and type map are
/// untouched, the cleaned table is returned alongside a report.
pub fn run_pipeline(
    table: &Table,
    types: &FieldTypeMap,
    options: &PipelineOptions,
) -> (Table, PipelineReport) {
    let original_rows = table.len();

    let (working, types) = if options.selected_fields.is_empty() {
        (table.clone(), types.clone())
    } else {
        let projected = table.select_fields(&options.selected_fields);
        let filtered: FieldTypeMap = types
            .iter()
            .filter(|(field, _)| options.selected_fields.contains(field))
            .map(|(field, ty)| (field.clone(), *ty))
            .collect();
        (projected, filtered)
    };

    info!(strategy = %options.strategy, rows = working.len(), "resolving missing values");
    let resolved = resolve_missing(&working, &types, options.strategy);

    info!(rows = resolved.len(), "cleaning values");
    let cleaned = clean_values(&resolved, &types);

    let deduped = if !options.dedupe_keys.is_empty() {
        info!(keys = ?options.dedupe_keys, "deduplicating by keys");
        deduplicate_by_keys(&cleaned, &options.dedupe_keys)
    } else if options.dedupe {
        info!("deduplicating exact rows");
        deduplicate_exact(&cleaned)
    } else {
        cleaned.clone()
    };
    let duplicates_removed = cleaned.len() - deduped.len();

    info!(rows = deduped.len(), "deriving features");
    let enriched = derive_features(&deduped);

    info!(required = ?options.required_fields, "validating rows");
    let validated = validate_rows(&enriched, &options.required_fields);

    let report = PipelineReport {
        original_rows,
        cleaned_rows: validated.len(),
        duplicates_removed,
        fields_processed: types.len(),
        strategy: options.strategy.to_string(),
    };
    (validated, report)
}
