use crate::errors::AppResult;
use crate::export::model::AssignmentExport;
use crate::export::{ExportFormat, csv, fs_utils, json, xlsx};
use crate::store::workbook::WorkbookStore;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the full assignments table to the requested format.
    pub fn export(
        store: &WorkbookStore,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let assignments = store.load_assignments()?;
        let rows: Vec<AssignmentExport> =
            assignments.iter().map(AssignmentExport::from).collect();

        let path = expand_tilde(file);
        if !fs_utils::prepare_destination(&path, force)? {
            return Ok(());
        }

        match format {
            ExportFormat::Csv => csv::export_csv(&rows, &path),
            ExportFormat::Json => json::export_json(&rows, &path),
            ExportFormat::Xlsx => xlsx::export_xlsx(&rows, &path),
        }
    }
}
