use super::attendance::attended;
use crate::config::StatsConfig;
use crate::model::{FullTimeResult, MatchRecord, Outcome, Venue};
use crate::table::RawRow;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// One attended match, seen from the reference club
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub date: String,
    #[serde(skip)]
    pub date_value: Option<NaiveDate>,
    pub attendee: String,
    pub opponent: String,
    pub venue: Venue,
    pub goals_for: u64,
    pub goals_against: u64,
    pub result: Option<FullTimeResult>,
    pub outcome: Outcome,
}

impl TimelineEntry {
    fn from_record(record: &MatchRecord<'_>, club: &str) -> Self {
        Self {
            date: record.date().to_string(),
            date_value: record.date_value(),
            attendee: record.attendee().to_string(),
            opponent: record.opponent(club).to_string(),
            venue: record.venue(club),
            goals_for: record.goals_for(club),
            goals_against: record.goals_against(club),
            result: record.result(),
            outcome: record.outcome_for(club),
        }
    }

    /// Score as "club-opponent"
    pub fn score(&self) -> String {
        format!("{}-{}", self.goals_for, self.goals_against)
    }
}

/// Attended matches in chronological order.
///
/// Equal dates keep file order. Rows whose date is not a valid `DD/MM/YYYY`
/// come after all dated rows, also in file order.
pub fn timeline(rows: &[RawRow], config: &StatsConfig) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = attended(rows, &config.columns, &config.tracked)
        .into_iter()
        .map(|row| {
            TimelineEntry::from_record(&MatchRecord::new(row, &config.columns), &config.reference_team)
        })
        .collect();

    entries.sort_by(|a, b| match (a.date_value, b.date_value) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let undated = entries.iter().filter(|e| e.date_value.is_none()).count();
    if undated > 0 {
        log::warn!("{} attended match(es) have no valid DD/MM/YYYY date", undated);
    }

    entries
}
