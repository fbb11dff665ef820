//! Workbook adapter: reads and writes the two worksheets that back the
//! whole tool.
//!
//! Loads go through the process-wide TTL cache. Saves always write BOTH
//! sheets into a temporary workbook in the destination directory and then
//! rename it over the target, so a failed write never leaves one sheet
//! updated and the other stale.

use crate::errors::{AppError, AppResult};
use crate::models::assignment::Assignment;
use crate::models::credential::Credential;
use crate::models::spot_state::SpotState;
use crate::store::cache;
use crate::store::schema::{
    ASSIGNMENT_COLUMNS, COL_DATE, COL_OWNER_EMAIL, COL_OWNER_NAME, COL_REASSIGNED_TO,
    COL_SPOT_LETTER, COL_SPOT_NUMBER, COL_STATE, COL_USAGE_DAY, COL_USER_EMAIL, COL_USER_ROLE,
    COL_USER_SECRET, CREDENTIAL_COLUMNS, SHEET_ASSIGNMENTS, SHEET_USERS,
};
use crate::utils::date::{parse_date, to_excel_serial};
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct WorkbookStore {
    path: PathBuf,
    ttl: Duration,
}

impl WorkbookStore {
    pub fn new<P: Into<PathBuf>>(path: P, ttl_secs: u64) -> Self {
        Self {
            path: path.into(),
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load both tables, reusing the cached pair when still fresh.
    pub fn load_tables(&self) -> AppResult<(Vec<Assignment>, Vec<Credential>)> {
        if let Some(pair) = cache::get(&self.path, self.ttl) {
            return Ok(pair);
        }

        let assignments = self.load_assignments()?;
        let users = self.load_users()?;
        cache::put(&self.path, &assignments, &users);

        Ok((assignments, users))
    }

    pub fn load_assignments(&self) -> AppResult<Vec<Assignment>> {
        let range = self.sheet_range(SHEET_ASSIGNMENTS)?;
        let (_, rows) = assignments_from_range(&range);
        Ok(rows)
    }

    pub fn load_users(&self) -> AppResult<Vec<Credential>> {
        let range = self.sheet_range(SHEET_USERS)?;
        let headers = header_row(&range);

        let i_email = col_idx(&headers, COL_USER_EMAIL);
        let i_secret = col_idx(&headers, COL_USER_SECRET);
        let i_role = col_idx(&headers, COL_USER_ROLE);

        let mut out = Vec::new();
        for row in range.rows().skip(1) {
            if row_is_empty(row) {
                continue;
            }
            out.push(Credential {
                email: string_of(get(row, i_email)),
                secret: string_of(get(row, i_secret)),
                role: string_of(get(row, i_role)),
            });
        }
        Ok(out)
    }

    /// Persist both tables as one logical unit and invalidate the cache.
    pub fn save(&self, assignments: &[Assignment], users: &[Credential]) -> AppResult<()> {
        let mut workbook = Workbook::new();

        write_assignments_sheet(workbook.add_worksheet(), assignments)?;
        write_users_sheet(workbook.add_worksheet(), users)?;

        let tmp = self.path.with_extension("xlsx.tmp");
        workbook
            .save(&tmp)
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| AppError::Persistence(e.to_string()))?;

        cache::invalidate();
        Ok(())
    }

    fn sheet_range(&self, sheet: &str) -> AppResult<Range<Data>> {
        if !self.path.exists() {
            return Err(AppError::Storage(self.path.display().to_string()));
        }
        let mut wb: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| AppError::Storage(format!("{}: {}", self.path.display(), e)))?;
        wb.worksheet_range(sheet)
            .map_err(|_| AppError::SheetMissing(sheet.to_string()))
    }
}

/// Read the first worksheet of a candidate replacement file, returning its
/// header list (for validation) and its parsed rows.
pub fn read_candidate(path: &Path) -> AppResult<(Vec<String>, Vec<Assignment>)> {
    if !path.exists() {
        return Err(AppError::Storage(path.display().to_string()));
    }
    let mut wb: Xlsx<_> = open_workbook(path)
        .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))?;
    let name = wb
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Storage(format!("{}: workbook has no sheets", path.display())))?;
    let range = wb
        .worksheet_range(&name)
        .map_err(|_| AppError::SheetMissing(name.clone()))?;

    Ok(assignments_from_range(&range))
}

fn assignments_from_range(range: &Range<Data>) -> (Vec<String>, Vec<Assignment>) {
    let headers = header_row(range);

    let i_date = col_idx(&headers, COL_DATE);
    let i_number = col_idx(&headers, COL_SPOT_NUMBER);
    let i_letter = col_idx(&headers, COL_SPOT_LETTER);
    let i_email = col_idx(&headers, COL_OWNER_EMAIL);
    let i_name = col_idx(&headers, COL_OWNER_NAME);
    let i_state = col_idx(&headers, COL_STATE);
    let i_reassigned = col_idx(&headers, COL_REASSIGNED_TO);
    let i_day = col_idx(&headers, COL_USAGE_DAY);

    let mut rows = Vec::new();
    for row in range.rows().skip(1) {
        if row_is_empty(row) {
            continue;
        }
        rows.push(Assignment {
            date: date_of(get(row, i_date)),
            spot_number: string_of(get(row, i_number)),
            spot_letter: string_of(get(row, i_letter)),
            owner_email: string_of(get(row, i_email)),
            owner_name: string_of(get(row, i_name)),
            state: SpotState::from_sheet_str(&string_of(get(row, i_state))),
            reassigned_to: string_of(get(row, i_reassigned)),
            usage_day: string_of(get(row, i_day)),
        });
    }

    (headers, rows)
}

fn write_assignments_sheet(ws: &mut Worksheet, rows: &[Assignment]) -> AppResult<()> {
    ws.set_name(SHEET_ASSIGNMENTS).map_err(xlsx_err)?;

    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (c, header) in ASSIGNMENT_COLUMNS.iter().enumerate() {
        ws.write(0, c as u16, *header).map_err(xlsx_err)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;

        if let Some(d) = row.date {
            ws.write_number_with_format(r, 0, to_excel_serial(d), &date_format)
                .map_err(xlsx_err)?;
        }
        write_cell_guessed(ws, r, 1, &row.spot_number)?;
        ws.write(r, 2, row.spot_letter.as_str()).map_err(xlsx_err)?;
        ws.write(r, 3, row.owner_email.as_str()).map_err(xlsx_err)?;
        ws.write(r, 4, row.owner_name.as_str()).map_err(xlsx_err)?;
        ws.write(r, 5, row.state.to_sheet_str()).map_err(xlsx_err)?;
        ws.write(r, 6, row.reassigned_to.as_str()).map_err(xlsx_err)?;
        ws.write(r, 7, row.usage_day.as_str()).map_err(xlsx_err)?;
    }

    Ok(())
}

fn write_users_sheet(ws: &mut Worksheet, users: &[Credential]) -> AppResult<()> {
    ws.set_name(SHEET_USERS).map_err(xlsx_err)?;

    for (c, header) in CREDENTIAL_COLUMNS.iter().enumerate() {
        ws.write(0, c as u16, *header).map_err(xlsx_err)?;
    }

    for (i, user) in users.iter().enumerate() {
        let r = (i + 1) as u32;
        ws.write(r, 0, user.email.as_str()).map_err(xlsx_err)?;
        // Secrets stay text even when they look numeric
        ws.write(r, 1, user.secret.as_str()).map_err(xlsx_err)?;
        ws.write(r, 2, user.role.as_str()).map_err(xlsx_err)?;
    }

    Ok(())
}

/// Write a number cell when the text round-trips exactly, a string cell
/// otherwise (keeps `007`-style values intact).
fn write_cell_guessed(ws: &mut Worksheet, r: u32, c: u16, s: &str) -> AppResult<()> {
    match s.parse::<i64>() {
        Ok(n) if n.to_string() == s => ws.write_number(r, c, n as f64).map_err(xlsx_err)?,
        _ => ws.write(r, c, s).map_err(xlsx_err)?,
    };
    Ok(())
}

fn xlsx_err(e: XlsxError) -> AppError {
    AppError::Persistence(e.to_string())
}

fn header_row(range: &Range<Data>) -> Vec<String> {
    match range.rows().next() {
        Some(row) => row.iter().map(|c| string_of(Some(c))).collect(),
        None => Vec::new(),
    }
}

fn col_idx(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn get<'a>(row: &'a [Data], idx: Option<usize>) -> Option<&'a Data> {
    idx.and_then(|i| row.get(i))
}

fn row_is_empty(row: &[Data]) -> bool {
    row.iter().all(|c| matches!(c, Data::Empty))
}

/// Missing cells normalize to the empty string; integral floats lose the
/// trailing `.0` Excel gives them.
fn string_of(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) | Some(Data::Error(_)) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Some(Data::Bool(b)) => b.to_string(),
        Some(Data::DateTime(dt)) => match dt.as_datetime() {
            Some(d) => d.date().format("%Y-%m-%d").to_string(),
            None => String::new(),
        },
        Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => s.clone(),
    }
}

/// Coerce a cell to a date. Unparseable values become None and never
/// match a date filter.
fn date_of(cell: Option<&Data>) -> Option<NaiveDate> {
    match cell? {
        Data::DateTime(dt) => dt.as_datetime().map(|d| d.date()),
        Data::String(s) => parse_date(s),
        Data::DateTimeIso(s) => parse_date(s.get(..10).unwrap_or(s)),
        _ => None,
    }
}
