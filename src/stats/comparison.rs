use crate::model::{Fixed, PersonReport};
use serde::Serialize;
use std::cmp::Ordering;

/// Points-per-game gap above which the difference is worth reporting (0.10)
const NOTABLE_PPG_GAP: Fixed = Fixed::from_scaled(10, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Head-to-head of two supporters' records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub left: String,
    pub right: String,
    /// left wins minus right wins
    pub wins_diff: i64,
    /// left points per game minus right points per game
    pub points_per_game_diff: Fixed,
    /// Both supporters attended at least one match
    pub both_have_matches: bool,
}

impl Comparison {
    pub fn between(left: &PersonReport, right: &PersonReport) -> Self {
        Self {
            left: left.person.clone(),
            right: right.person.clone(),
            wins_diff: left.summary.wins as i64 - right.summary.wins as i64,
            points_per_game_diff: left.summary.points_per_game - right.summary.points_per_game,
            both_have_matches: left.summary.total_matches > 0 && right.summary.total_matches > 0,
        }
    }

    /// Side with more wins, `None` on a tie
    pub fn leader(&self) -> Option<Side> {
        match self.wins_diff.cmp(&0) {
            Ordering::Greater => Some(Side::Left),
            Ordering::Less => Some(Side::Right),
            Ordering::Equal => None,
        }
    }

    pub fn leader_name(&self) -> Option<&str> {
        self.leader().map(|side| match side {
            Side::Left => self.left.as_str(),
            Side::Right => self.right.as_str(),
        })
    }

    pub fn points_gap_is_notable(&self) -> bool {
        (self.points_per_game_diff.abs() - NOTABLE_PPG_GAP).scaled() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExtendedStats, StatsSummary};

    fn report(person: &str, wins: u64, draws: u64, losses: u64) -> PersonReport {
        PersonReport {
            person: person.to_string(),
            summary: StatsSummary::from_counts(wins, draws, losses, 0, 0),
            extended: ExtendedStats::default(),
        }
    }

    #[test]
    fn test_left_leads() {
        let c = Comparison::between(&report("Steppo", 3, 1, 0), &report("Guzzo", 1, 1, 2));
        assert_eq!(c.wins_diff, 2);
        assert_eq!(c.leader(), Some(Side::Left));
        assert_eq!(c.leader_name(), Some("Steppo"));
        // 2.50 - 1.00
        assert_eq!(c.points_per_game_diff.to_string(), "1.50");
        assert!(c.points_gap_is_notable());
        assert!(c.both_have_matches);
    }

    #[test]
    fn test_right_leads_with_negative_gap() {
        let c = Comparison::between(&report("Steppo", 0, 1, 1), &report("Guzzo", 2, 0, 0));
        assert_eq!(c.leader(), Some(Side::Right));
        assert_eq!(c.points_per_game_diff.to_string(), "-2.50");
        assert!(c.points_gap_is_notable());
    }

    #[test]
    fn test_tie_and_small_gap() {
        // 1.00 v 1.00
        let c = Comparison::between(&report("A", 1, 0, 2), &report("B", 1, 0, 2));
        assert_eq!(c.leader(), None);
        assert!(!c.points_gap_is_notable());

        // 2.00 v 1.90 is exactly 0.10, not above it
        let left = report("A", 2, 0, 1);
        let mut right = report("B", 0, 0, 0);
        right.summary.points_per_game = Fixed::from_scaled(190, 2);
        let c = Comparison::between(&left, &right);
        assert_eq!(c.points_per_game_diff.to_string(), "0.10");
        assert!(!c.points_gap_is_notable());
    }

    #[test]
    fn test_empty_side() {
        let c = Comparison::between(&report("A", 1, 0, 0), &report("B", 0, 0, 0));
        assert!(!c.both_have_matches);
    }
}
