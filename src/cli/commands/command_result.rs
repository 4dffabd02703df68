use std::path::PathBuf;

use crate::core::{ReconcileSummary, ScanDiagnostic};

#[derive(Debug)]
pub struct GenerateSummary {
    /// Where the report was written.
    pub output_path: PathBuf,
    /// Number of definition files read.
    pub files_scanned: usize,
    pub reconcile: ReconcileSummary,
    /// Non-fatal findings from the scan, in discovery order.
    pub diagnostics: Vec<ScanDiagnostic>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: PathBuf,
}

/// Result of running a vsmap command.
#[derive(Debug)]
pub enum CommandResult {
    Generate(GenerateSummary),
    Init(InitSummary),
}
