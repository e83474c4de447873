pub mod reader;
pub mod row;

pub use reader::{detect_delimiter, parse, parse_file, CsvTable};
pub use row::RawRow;
