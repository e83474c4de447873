pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod source;
pub mod stats;
pub mod table;
pub mod validate;

pub use config::StatsConfig;
pub use error::{Result, StatsError};
pub use model::*;
pub use stats::{compute, StatsAggregator};
pub use table::{parse, CsvTable, RawRow};
