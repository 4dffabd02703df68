//! Mapping pipeline: scan → resolve → reconcile → render.
//!
//! - `scanner`: finds `[UnitTitle(..)]` declarations and resolves them inline
//! - `resolver`: title → category and localized label
//! - `reconcile`: inserts placeholders for unimplemented required titles
//! - `render`: sorted, grouped plain-text document

pub mod catalog;
pub mod entry;
pub mod reconcile;
pub mod render;
pub mod resolver;
pub mod scanner;

pub use catalog::Catalog;
pub use entry::{Entry, EntryMap, SourceLocation, UNIMPLEMENTED_TYPE};
pub use reconcile::{ReconcileSummary, Reconciled, reconcile};
pub use render::render_document;
pub use resolver::Resolver;
pub use scanner::{ScanDiagnostic, ScanResult, Scanner};
