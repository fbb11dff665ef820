use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date the way the workbook may carry it: ISO first, then the
/// display format used in the office (dd/mm/YYYY).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}

pub fn fmt_date(d: &NaiveDate, format: &str) -> String {
    d.format(format).to_string()
}

/// Render an optional occurrence date for tables and messages.
pub fn fmt_opt_date(d: &Option<NaiveDate>, format: &str) -> String {
    match d {
        Some(d) => fmt_date(d, format),
        None => String::new(),
    }
}

/// Excel serial number for a date (epoch 1899-12-30).
pub fn to_excel_serial(d: NaiveDate) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (d - excel_epoch).num_days() as f64
}
