use anyhow::{Context, Result, bail};

use scrub_analyze::{check_outlier_field, detect_outliers_zscore, summary_stats};
use scrub_cli::session::{Session, SessionStore};
use scrub_ingest::{export_csv, export_json, load_table};
use scrub_model::{MissingStrategy, Table};
use scrub_transform::{PipelineOptions, infer_types, run_pipeline};
use tracing::info;

use crate::cli::{AnalyzeArgs, CleanArgs, ExportFormatArg, InspectArgs};
use crate::summary::{print_outliers, print_preview, print_report, print_stats, print_types};

const PREVIEW_ROWS: usize = 5;

/// Load a file into a fresh session: parse, infer types from the first row,
/// store.
fn open_session(store: &mut dyn SessionStore, file: &std::path::Path) -> Result<u64> {
    let table = load_table(file)
        .with_context(|| format!("load {}", file.display()))?;
    if table.is_empty() {
        bail!("{} contains no rows", file.display());
    }
    let sample = table
        .sample_row()
        .context("table has no sample row")?;
    let types = infer_types(sample);
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!(file = %file_name, rows = table.len(), fields = types.len(), "session opened");
    Ok(store.create(Session::new(file_name, table, types)))
}

pub fn run_inspect(store: &mut dyn SessionStore, args: &InspectArgs) -> Result<()> {
    let id = open_session(store, &args.file)?;
    let session = store.get(id).context("session disappeared")?;

    println!("File: {}", session.file_name);
    println!("Rows: {}", session.original.len());
    print_types(&session.types);
    print_preview(&session.original, PREVIEW_ROWS);
    Ok(())
}

pub fn run_clean(store: &mut dyn SessionStore, args: &CleanArgs) -> Result<()> {
    let id = open_session(store, &args.file)?;
    let session = store.get(id).context("session disappeared")?;

    let options = PipelineOptions {
        strategy: MissingStrategy::from_name(&args.strategy),
        selected_fields: args.fields.clone(),
        dedupe: !args.no_dedupe,
        dedupe_keys: args.dedupe_keys.clone(),
        required_fields: args.required.clone(),
    };
    let (cleaned, report) = run_pipeline(&session.original, &session.types, &options);

    let mut updated = session.clone();
    updated.cleaned = Some(cleaned.clone());
    updated.report = Some(report.clone());
    store.update(id, updated);

    print_report(&report);
    print_preview(&cleaned, PREVIEW_ROWS);

    if let Some(output) = &args.output {
        match args.format {
            ExportFormatArg::Json => export_json(&cleaned, output)
                .with_context(|| format!("export {}", output.display()))?,
            ExportFormatArg::Csv => export_csv(&cleaned, output)
                .with_context(|| format!("export {}", output.display()))?,
        }
        println!("Exported: {}", output.display());
    }
    Ok(())
}

pub fn run_analyze(store: &mut dyn SessionStore, args: &AnalyzeArgs) -> Result<()> {
    let id = open_session(store, &args.file)?;
    let session = store.get(id).context("session disappeared")?;

    let options = PipelineOptions {
        strategy: MissingStrategy::from_name(&args.strategy),
        ..PipelineOptions::default()
    };
    let (cleaned, report) = run_pipeline(&session.original, &session.types, &options);
    let types = session.types.clone();

    let mut updated = session.clone();
    updated.cleaned = Some(cleaned.clone());
    updated.report = Some(report);
    store.update(id, updated);

    let stats = summary_stats(&cleaned, &types);
    print_stats(&stats);

    if let Some(field) = &args.field {
        // Caller misuse surfaces here, not in the core: the detectors
        // themselves are total.
        check_outlier_field(&types, field)?;
        let flagged: Table = detect_outliers_zscore(&cleaned, field, args.z_threshold);
        print_outliers(&flagged, field, args.z_threshold);
    }
    Ok(())
}
