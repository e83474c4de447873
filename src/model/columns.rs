/// Home/away column pair for a per-side statistic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideColumns {
    pub home: String,
    pub away: String,
}

impl SideColumns {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }
}

/// Which header names carry which meaning.
///
/// Defaults follow the football-data.co.uk layout plus a `Tifoso` column
/// naming the supporter who attended the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub person: String,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: String,
    pub away_goals: String,
    pub result: String,
    pub shots: SideColumns,
    pub shots_on_target: SideColumns,
    pub corners: SideColumns,
    pub yellow_cards: SideColumns,
    pub red_cards: SideColumns,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            person: "Tifoso".to_string(),
            date: "Date".to_string(),
            home_team: "HomeTeam".to_string(),
            away_team: "AwayTeam".to_string(),
            home_goals: "FTHG".to_string(),
            away_goals: "FTAG".to_string(),
            result: "FTR".to_string(),
            shots: SideColumns::new("HS", "AS"),
            shots_on_target: SideColumns::new("HST", "AST"),
            corners: SideColumns::new("HC", "AC"),
            yellow_cards: SideColumns::new("HY", "AY"),
            red_cards: SideColumns::new("HR", "AR"),
        }
    }
}

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, column: impl Into<String>) -> Self {
        self.person = column.into();
        self
    }

    pub fn with_home_team(mut self, column: impl Into<String>) -> Self {
        self.home_team = column.into();
        self
    }

    pub fn with_goals(mut self, home: impl Into<String>, away: impl Into<String>) -> Self {
        self.home_goals = home.into();
        self.away_goals = away.into();
        self
    }

    pub fn with_result(mut self, column: impl Into<String>) -> Self {
        self.result = column.into();
        self
    }

    /// Columns the core aggregation cannot work without
    pub fn required(&self) -> [&str; 7] {
        [
            self.person.as_str(),
            self.date.as_str(),
            self.home_team.as_str(),
            self.away_team.as_str(),
            self.home_goals.as_str(),
            self.away_goals.as_str(),
            self.result.as_str(),
        ]
    }
}
