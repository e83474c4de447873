use crate::model::Columns;

pub const DEFAULT_REFERENCE_TEAM: &str = "Como";
pub const DEFAULT_TRACKED: [&str; 2] = ["Steppo", "Guzzo"];

/// Configuration for aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    /// Column mapping for the input file
    pub columns: Columns,
    /// Club whose home/away status normalizes results and goals
    pub reference_team: String,
    /// Supporters whose attendance is tracked, in report order
    pub tracked: Vec<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            columns: Columns::default(),
            reference_team: DEFAULT_REFERENCE_TEAM.to_string(),
            tracked: DEFAULT_TRACKED.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl StatsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(mut self, columns: Columns) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_reference_team(mut self, team: impl Into<String>) -> Self {
        self.reference_team = team.into();
        self
    }

    pub fn with_tracked<I, S>(mut self, persons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tracked = persons.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_tracked(&self, person: &str) -> bool {
        self.tracked.iter().any(|p| p == person)
    }
}
