use super::columns::{Columns, SideColumns};
use super::number::parse_count;
use crate::table::RawRow;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Full-time result tag as recorded in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FullTimeResult {
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "A")]
    Away,
    #[serde(rename = "D")]
    Draw,
}

impl FullTimeResult {
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim() {
            "H" => Some(FullTimeResult::Home),
            "A" => Some(FullTimeResult::Away),
            "D" => Some(FullTimeResult::Draw),
            _ => None,
        }
    }

    pub fn to_tag(&self) -> &'static str {
        match self {
            FullTimeResult::Home => "H",
            FullTimeResult::Away => "A",
            FullTimeResult::Draw => "D",
        }
    }
}

impl fmt::Display for FullTimeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tag())
    }
}

/// Result of a match from the reference club's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Classify a result tag for a club playing at home or away.
    ///
    /// Anything that is neither a draw nor a win for the club is a loss,
    /// including a missing or unrecognised tag.
    pub fn classify(result: Option<FullTimeResult>, club_at_home: bool) -> Self {
        match result {
            Some(FullTimeResult::Draw) => Outcome::Draw,
            Some(FullTimeResult::Home) if club_at_home => Outcome::Win,
            Some(FullTimeResult::Away) if !club_at_home => Outcome::Win,
            _ => Outcome::Loss,
        }
    }

    pub fn points(&self) -> u64 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "W"),
            Outcome::Draw => write!(f, "D"),
            Outcome::Loss => write!(f, "L"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Home,
    Away,
}

/// Typed view of a row through a column mapping. Nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct MatchRecord<'a> {
    row: &'a RawRow,
    columns: &'a Columns,
}

impl<'a> MatchRecord<'a> {
    pub fn new(row: &'a RawRow, columns: &'a Columns) -> Self {
        Self { row, columns }
    }

    pub fn row(&self) -> &'a RawRow {
        self.row
    }

    /// Raw `DD/MM/YYYY` date string
    pub fn date(&self) -> &'a str {
        self.row.value(&self.columns.date)
    }

    pub fn home_team(&self) -> &'a str {
        self.row.value(&self.columns.home_team)
    }

    pub fn away_team(&self) -> &'a str {
        self.row.value(&self.columns.away_team)
    }

    pub fn home_goals(&self) -> u64 {
        parse_count(self.row.value(&self.columns.home_goals))
    }

    pub fn away_goals(&self) -> u64 {
        parse_count(self.row.value(&self.columns.away_goals))
    }

    pub fn result(&self) -> Option<FullTimeResult> {
        FullTimeResult::from_tag(self.row.value(&self.columns.result))
    }

    /// Who attended, trimmed; empty when nobody was recorded
    pub fn attendee(&self) -> &'a str {
        self.row.value(&self.columns.person).trim()
    }

    pub fn is_home(&self, club: &str) -> bool {
        self.home_team() == club
    }

    pub fn venue(&self, club: &str) -> Venue {
        if self.is_home(club) {
            Venue::Home
        } else {
            Venue::Away
        }
    }

    pub fn outcome_for(&self, club: &str) -> Outcome {
        Outcome::classify(self.result(), self.is_home(club))
    }

    pub fn goals_for(&self, club: &str) -> u64 {
        if self.is_home(club) {
            self.home_goals()
        } else {
            self.away_goals()
        }
    }

    pub fn goals_against(&self, club: &str) -> u64 {
        if self.is_home(club) {
            self.away_goals()
        } else {
            self.home_goals()
        }
    }

    pub fn opponent(&self, club: &str) -> &'a str {
        if self.is_home(club) {
            self.away_team()
        } else {
            self.home_team()
        }
    }

    /// Cells of a per-side statistic as (club, opponent)
    pub fn side_cells(&self, pair: &SideColumns, club: &str) -> (&'a str, &'a str) {
        let home = self.row.value(&pair.home);
        let away = self.row.value(&pair.away);
        if self.is_home(club) {
            (home, away)
        } else {
            (away, home)
        }
    }

    /// Calendar date, when the cell is a valid `DD/MM/YYYY`
    pub fn date_value(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date(), "%d/%m/%Y").ok()
    }

    /// Has the date and home team every usable match row carries
    pub fn is_complete(&self) -> bool {
        !self.date().is_empty() && !self.home_team().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn away_row() -> RawRow {
        RawRow::from_pairs([
            ("Date", "16/08/2025"),
            ("HomeTeam", "Udinese"),
            ("AwayTeam", "Como"),
            ("FTHG", "0"),
            ("FTAG", "2"),
            ("FTR", "A"),
            ("Tifoso", " Guzzo "),
            ("HS", "9"),
            ("AS", "14"),
        ])
    }

    #[test]
    fn test_result_tags() {
        assert_eq!(FullTimeResult::from_tag("H"), Some(FullTimeResult::Home));
        assert_eq!(FullTimeResult::from_tag("A"), Some(FullTimeResult::Away));
        assert_eq!(FullTimeResult::from_tag("D"), Some(FullTimeResult::Draw));
        assert_eq!(FullTimeResult::from_tag("h"), None);
        assert_eq!(FullTimeResult::from_tag(""), None);
    }

    #[test]
    fn test_classify_is_exhaustive() {
        use FullTimeResult::*;
        assert_eq!(Outcome::classify(Some(Home), true), Outcome::Win);
        assert_eq!(Outcome::classify(Some(Away), false), Outcome::Win);
        assert_eq!(Outcome::classify(Some(Home), false), Outcome::Loss);
        assert_eq!(Outcome::classify(Some(Away), true), Outcome::Loss);
        assert_eq!(Outcome::classify(Some(Draw), true), Outcome::Draw);
        assert_eq!(Outcome::classify(Some(Draw), false), Outcome::Draw);
        assert_eq!(Outcome::classify(None, true), Outcome::Loss);
    }

    #[test]
    fn test_away_match_normalization() {
        let row = away_row();
        let columns = Columns::default();
        let record = MatchRecord::new(&row, &columns);

        assert!(!record.is_home("Como"));
        assert_eq!(record.venue("Como"), Venue::Away);
        assert_eq!(record.outcome_for("Como"), Outcome::Win);
        assert_eq!(record.goals_for("Como"), 2);
        assert_eq!(record.goals_against("Como"), 0);
        assert_eq!(record.opponent("Como"), "Udinese");
        assert_eq!(record.attendee(), "Guzzo");
        assert_eq!(record.side_cells(&columns.shots, "Como"), ("14", "9"));
    }

    #[test]
    fn test_date_value() {
        let row = away_row();
        let columns = Columns::default();
        let record = MatchRecord::new(&row, &columns);
        assert_eq!(record.date_value(), NaiveDate::from_ymd_opt(2025, 8, 16));
        assert!(record.is_complete());

        let bad = RawRow::from_pairs([("Date", "2025-08-16"), ("HomeTeam", "Como")]);
        assert_eq!(MatchRecord::new(&bad, &columns).date_value(), None);
    }

    #[test]
    fn test_incomplete_row() {
        let row = RawRow::from_pairs([("Date", ""), ("HomeTeam", "Como")]);
        let columns = Columns::default();
        assert!(!MatchRecord::new(&row, &columns).is_complete());
    }
}
