use super::fixed::Fixed;
use serde::Serialize;

/// Win/draw/loss and goal totals for one supporter's attended matches.
///
/// Always rebuilt from rows; `wins + draws + losses == total_matches`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_matches: u64,
    pub wins: u64,
    pub draws: u64,
    pub losses: u64,
    pub goals_for: u64,
    pub goals_against: u64,
    pub points: u64,
    /// Two decimal places
    pub points_per_game: Fixed,
    /// One decimal place
    pub win_rate_percent: Fixed,
}

impl StatsSummary {
    pub fn empty() -> Self {
        Self::from_counts(0, 0, 0, 0, 0)
    }

    /// Derive totals, points and rates from the raw counts
    pub fn from_counts(wins: u64, draws: u64, losses: u64, goals_for: u64, goals_against: u64) -> Self {
        let total_matches = wins + draws + losses;
        let points = wins * 3 + draws;
        Self {
            total_matches,
            wins,
            draws,
            losses,
            goals_for,
            goals_against,
            points,
            points_per_game: Fixed::from_ratio(points, total_matches, 2),
            win_rate_percent: Fixed::from_ratio(wins * 100, total_matches, 1),
        }
    }

    pub fn goal_difference(&self) -> i64 {
        let goals_for = i64::try_from(self.goals_for).unwrap_or(i64::MAX);
        let goals_against = i64::try_from(self.goals_against).unwrap_or(i64::MAX);
        goals_for.saturating_sub(goals_against)
    }
}

impl Default for StatsSummary {
    fn default() -> Self {
        Self::empty()
    }
}

/// Shots, corners and cards from the reference club's side.
///
/// An average is `None` when none of the attended matches has the column
/// filled in for the club's side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedStats {
    pub shots_for: u64,
    pub shots_against: u64,
    pub shots_on_target_for: u64,
    pub shots_on_target_against: u64,
    pub corners_for: u64,
    pub corners_against: u64,
    pub yellow_cards: u64,
    pub red_cards: u64,
    pub avg_shots_for: Option<Fixed>,
    pub avg_shots_on_target_for: Option<Fixed>,
    pub avg_corners_for: Option<Fixed>,
}

/// Everything computed for one tracked supporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonReport {
    pub person: String,
    pub summary: StatsSummary,
    pub extended: ExtendedStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let s = StatsSummary::empty();
        assert_eq!(s.total_matches, 0);
        assert_eq!(s.points, 0);
        assert_eq!(s.points_per_game.to_string(), "0.00");
        assert_eq!(s.win_rate_percent.to_string(), "0.0");
        assert_eq!(s, StatsSummary::default());
    }

    #[test]
    fn test_from_counts() {
        let s = StatsSummary::from_counts(2, 1, 1, 7, 4);
        assert_eq!(s.total_matches, 4);
        assert_eq!(s.points, 7);
        assert_eq!(s.points_per_game.to_string(), "1.75");
        assert_eq!(s.win_rate_percent.to_string(), "50.0");
        assert_eq!(s.goal_difference(), 3);
    }

    #[test]
    fn test_summary_json_shape() {
        let s = StatsSummary::from_counts(1, 0, 0, 2, 0);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["totalMatches"], 1);
        assert_eq!(json["pointsPerGame"], "3.00");
        assert_eq!(json["winRatePercent"], "100.0");
    }
}
