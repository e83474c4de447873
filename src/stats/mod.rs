pub mod aggregator;
pub mod attendance;
pub mod comparison;
pub mod timeline;

pub use aggregator::{compute, extended, matches_for, summarize, StatsAggregator};
pub use attendance::{attended, attendee_counts, attendee_values};
pub use comparison::{Comparison, Side};
pub use timeline::{timeline, TimelineEntry};
