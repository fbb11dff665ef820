use crate::errors::{AppError, AppResult};
use crate::export::model::AssignmentExport;
use crate::export::notify_export_success;
use std::fs::File;
use std::path::Path;

pub(crate) fn export_json(rows: &[AssignmentExport], path: &Path) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, rows).map_err(|e| AppError::Export(e.to_string()))?;

    notify_export_success("JSON", path);
    Ok(())
}
