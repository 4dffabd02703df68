//! Console output for command results.
//!
//! Separate from the pipeline so vsmap can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, GenerateSummary, InitSummary};
use crate::core::ScanDiagnostic;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a command result: diagnostics to stderr, confirmation to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    match result {
        CommandResult::Generate(summary) => {
            print_diagnostics_to(&summary.diagnostics, verbose, &mut io::stderr().lock());
            if verbose {
                print_summary_to(summary, &mut io::stderr().lock());
            }
            print_generated_to(summary, &mut io::stdout().lock());
        }
        CommandResult::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

/// Print scan diagnostics. Only a missing units directory is shown without `verbose`.
pub fn print_diagnostics_to<W: Write>(
    diagnostics: &[ScanDiagnostic],
    verbose: bool,
    writer: &mut W,
) {
    for diagnostic in diagnostics {
        let always = matches!(diagnostic, ScanDiagnostic::MissingUnitsDir { .. });
        if always || verbose {
            let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), diagnostic);
        }
    }
}

pub fn print_summary_to<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    let counts = &summary.reconcile;
    let _ = writeln!(
        writer,
        "Scanned {} definition {}: {} {} found, {} not implemented, {} need translation review",
        summary.files_scanned,
        if summary.files_scanned == 1 { "file" } else { "files" },
        counts.discovered,
        if counts.discovered == 1 { "unit" } else { "units" },
        counts.synthesized,
        counts.untranslated,
    );
}

pub fn print_generated_to<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Mapping file generated: {}", summary.output_path.display()).green()
    );
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.config_path.display()).green()
    );
}
