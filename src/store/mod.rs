pub mod cache;
pub mod schema;
pub mod workbook;
