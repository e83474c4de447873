//! Per-supporter aggregation over parsed match rows.
//!
//! Every function here is a pure function of its arguments: rows are only
//! borrowed and each call returns a freshly built value.

use crate::config::StatsConfig;
use crate::model::{
    parse_count, parse_int, Columns, ExtendedStats, Fixed, MatchRecord, Outcome, PersonReport, StatsSummary,
};
use crate::table::RawRow;

/// Compute the summary for one person.
///
/// Rows are kept when the trimmed cell at `person_key` equals `person_id`
/// exactly. Results and goals are read from the `FTR`, `FTHG` and `FTAG`
/// columns and normalized to `reference_team`, which is at home when the cell
/// at `home_team_key` equals it.
pub fn compute(
    rows: &[RawRow],
    person_key: &str,
    person_id: &str,
    home_team_key: &str,
    reference_team: &str,
) -> StatsSummary {
    let columns = Columns::default()
        .with_person(person_key)
        .with_home_team(home_team_key);
    summarize(rows, &columns, person_id, reference_team)
}

/// Rows attended by `person`, viewed through `columns`
pub fn matches_for<'a>(
    rows: &'a [RawRow],
    columns: &'a Columns,
    person: &'a str,
) -> impl Iterator<Item = MatchRecord<'a>> + 'a {
    rows.iter()
        .map(move |row| MatchRecord::new(row, columns))
        .filter(move |record| record.attendee() == person)
}

/// Same as [`compute`] with an arbitrary column mapping
pub fn summarize(
    rows: &[RawRow],
    columns: &Columns,
    person: &str,
    reference_team: &str,
) -> StatsSummary {
    let (mut wins, mut draws, mut losses) = (0u64, 0u64, 0u64);
    let (mut goals_for, mut goals_against) = (0u64, 0u64);

    for record in matches_for(rows, columns, person) {
        if record.result().is_none() {
            log::warn!(
                "{} {} v {}: unrecognised result {:?}, counted as a loss",
                record.date(),
                record.home_team(),
                record.away_team(),
                record.row().value(&columns.result)
            );
        }

        match record.outcome_for(reference_team) {
            Outcome::Win => wins += 1,
            Outcome::Draw => draws += 1,
            Outcome::Loss => losses += 1,
        }
        goals_for = goals_for.saturating_add(record.goals_for(reference_team));
        goals_against = goals_against.saturating_add(record.goals_against(reference_team));
    }

    let summary = StatsSummary::from_counts(wins, draws, losses, goals_for, goals_against);
    log::debug!(
        "{}: {} matches, {}W {}D {}L",
        person,
        summary.total_matches,
        summary.wins,
        summary.draws,
        summary.losses
    );
    summary
}

/// Totals saturate instead of wrapping on absurd cell values
fn add_count(total: &mut u64, cell: &str) {
    *total = total.saturating_add(parse_count(cell));
}

/// Shot, corner and card totals for one person's matches
pub fn extended(
    rows: &[RawRow],
    columns: &Columns,
    person: &str,
    reference_team: &str,
) -> ExtendedStats {
    let mut stats = ExtendedStats::default();
    let mut total = 0u64;
    let (mut has_shots, mut has_on_target, mut has_corners) = (false, false, false);

    for record in matches_for(rows, columns, person) {
        total += 1;

        let (ours, theirs) = record.side_cells(&columns.shots, reference_team);
        add_count(&mut stats.shots_for, ours);
        add_count(&mut stats.shots_against, theirs);
        has_shots |= parse_int(ours).is_some();

        let (ours, theirs) = record.side_cells(&columns.shots_on_target, reference_team);
        add_count(&mut stats.shots_on_target_for, ours);
        add_count(&mut stats.shots_on_target_against, theirs);
        has_on_target |= parse_int(ours).is_some();

        let (ours, theirs) = record.side_cells(&columns.corners, reference_team);
        add_count(&mut stats.corners_for, ours);
        add_count(&mut stats.corners_against, theirs);
        has_corners |= parse_int(ours).is_some();

        let (ours, _) = record.side_cells(&columns.yellow_cards, reference_team);
        add_count(&mut stats.yellow_cards, ours);

        let (ours, _) = record.side_cells(&columns.red_cards, reference_team);
        add_count(&mut stats.red_cards, ours);
    }

    stats.avg_shots_for = has_shots.then(|| Fixed::from_ratio(stats.shots_for, total, 1));
    stats.avg_shots_on_target_for =
        has_on_target.then(|| Fixed::from_ratio(stats.shots_on_target_for, total, 1));
    stats.avg_corners_for = has_corners.then(|| Fixed::from_ratio(stats.corners_for, total, 1));
    stats
}

/// Aggregation bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    config: StatsConfig,
}

impl StatsAggregator {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    pub fn summary(&self, rows: &[RawRow], person: &str) -> StatsSummary {
        summarize(rows, &self.config.columns, person, &self.config.reference_team)
    }

    pub fn extended(&self, rows: &[RawRow], person: &str) -> ExtendedStats {
        extended(rows, &self.config.columns, person, &self.config.reference_team)
    }

    pub fn report(&self, rows: &[RawRow], person: &str) -> PersonReport {
        PersonReport {
            person: person.to_string(),
            summary: self.summary(rows, person),
            extended: self.extended(rows, person),
        }
    }

    /// One report per tracked person, in configuration order
    pub fn reports(&self, rows: &[RawRow]) -> Vec<PersonReport> {
        self.config
            .tracked
            .iter()
            .map(|person| self.report(rows, person))
            .collect()
    }
}
