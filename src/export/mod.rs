pub mod delimited;
pub mod xlsx;

pub use delimited::{report_record, write_reports_csv, write_reports_csv_to_path, SUMMARY_HEADERS};
pub use xlsx::write_reports_xlsx;
