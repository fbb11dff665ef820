use crate::errors::{AppError, AppResult};
use crate::export::model::{AssignmentExport, export_to_row, get_headers};
use crate::export::notify_export_success;
use std::path::Path;

pub(crate) fn export_csv(rows: &[AssignmentExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.write_record(export_to_row(row))
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}
