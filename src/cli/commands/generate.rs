use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use chrono::Local;

use super::{CommandResult, GenerateSummary};
use crate::{
    cli::args::GenerateArgs,
    config::{Config, load_config},
    core::{Catalog, ReconcileSummary, ScanDiagnostic, Scanner, reconcile, render_document},
};

/// Timestamp format of the `自動生成日時` header line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn generate(args: GenerateArgs) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    generate_from(&cwd, args)
}

/// Generate the report, resolving relative paths against `cwd`.
///
/// Configuration priority: CLI arguments > `.vsmaprc.json` > built-in defaults.
pub fn generate_from(cwd: &Path, args: GenerateArgs) -> Result<CommandResult> {
    let start_dir = args
        .root
        .as_ref()
        .map(|root| cwd.join(root))
        .unwrap_or_else(|| cwd.to_path_buf());
    let loaded = load_config(&start_dir)?;

    let root = match (&args.root, loaded.config_dir) {
        (Some(_), _) => start_dir,
        (None, Some(config_dir)) => config_dir,
        (None, None) => start_dir,
    };
    let output_path = match args.output {
        Some(output) => cwd.join(output),
        None => root.join(&loaded.config.output),
    };

    let generated_at = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let report = build_report(&root, &loaded.config, &Catalog::builtin(), &generated_at)?;
    write_report(&output_path, &report.document)?;

    Ok(CommandResult::Generate(GenerateSummary {
        output_path,
        files_scanned: report.files_scanned,
        reconcile: report.reconcile,
        diagnostics: report.diagnostics,
    }))
}

/// A rendered report and the facts gathered while building it.
pub struct BuiltReport {
    pub document: String,
    pub files_scanned: usize,
    pub reconcile: ReconcileSummary,
    pub diagnostics: Vec<ScanDiagnostic>,
}

/// Run scan → reconcile → render for the project at `root`.
pub fn build_report(
    root: &Path,
    config: &Config,
    catalog: &Catalog,
    generated_at: &str,
) -> Result<BuiltReport> {
    let units_dir = root.join(&config.units_dir);
    let scan = Scanner::new(catalog, root)
        .with_ignores(config.ignore_patterns()?)
        .scan(&units_dir)?;
    let reconciled = reconcile(scan.entries, catalog);

    Ok(BuiltReport {
        document: render_document(&reconciled.entries, generated_at),
        files_scanned: scan.files_scanned,
        reconcile: reconciled.summary,
        diagnostics: scan.diagnostics,
    })
}

fn write_report(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    fs::write(path, document).with_context(|| format!("Failed to write report: {:?}", path))
}
