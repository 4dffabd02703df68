//! vsmap - Scratch block ↔ Visual Scripting node mapping generator
//!
//! vsmap scans FUnity's C# unit definitions for `[UnitTitle("...")]`
//! declarations, resolves each title to its Japanese Scratch block label and
//! category, adds placeholder rows for required blocks that are not yet
//! implemented, and writes a grouped plain-text mapping table.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: The scan → resolve → reconcile → render pipeline

pub mod cli;
pub mod config;
pub mod core;
