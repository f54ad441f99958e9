pub mod export;
pub mod import;

pub use export::{
    EXPORT_HEADERS, ExportError, export_filename, export_filename_today, render_results_csv,
};
pub use import::{RosterLoadError, RosterLoader};
