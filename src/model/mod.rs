pub mod columns;
pub mod fixed;
pub mod number;
pub mod record;
pub mod summary;

pub use columns::{Columns, SideColumns};
pub use fixed::Fixed;
pub use number::{parse_count, parse_int};
pub use record::{FullTimeResult, MatchRecord, Outcome, Venue};
pub use summary::{ExtendedStats, PersonReport, StatsSummary};
