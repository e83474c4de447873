use crate::error::Result;
use crate::model::{Fixed, PersonReport};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column headers shared by the CSV and Excel summary outputs
pub const SUMMARY_HEADERS: [&str; 21] = [
    "Person",
    "Matches",
    "Wins",
    "Draws",
    "Losses",
    "GoalsFor",
    "GoalsAgainst",
    "Points",
    "PointsPerGame",
    "WinRatePercent",
    "ShotsFor",
    "ShotsAgainst",
    "ShotsOnTargetFor",
    "ShotsOnTargetAgainst",
    "CornersFor",
    "CornersAgainst",
    "YellowCards",
    "RedCards",
    "AvgShotsFor",
    "AvgShotsOnTargetFor",
    "AvgCornersFor",
];

fn optional(value: Option<Fixed>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// One summary row, in `SUMMARY_HEADERS` order
pub fn report_record(report: &PersonReport) -> Vec<String> {
    let s = &report.summary;
    let x = &report.extended;
    vec![
        report.person.clone(),
        s.total_matches.to_string(),
        s.wins.to_string(),
        s.draws.to_string(),
        s.losses.to_string(),
        s.goals_for.to_string(),
        s.goals_against.to_string(),
        s.points.to_string(),
        s.points_per_game.to_string(),
        s.win_rate_percent.to_string(),
        x.shots_for.to_string(),
        x.shots_against.to_string(),
        x.shots_on_target_for.to_string(),
        x.shots_on_target_against.to_string(),
        x.corners_for.to_string(),
        x.corners_against.to_string(),
        x.yellow_cards.to_string(),
        x.red_cards.to_string(),
        optional(x.avg_shots_for),
        optional(x.avg_shots_on_target_for),
        optional(x.avg_corners_for),
    ]
}

/// Write one CSV row per report to any writer
pub fn write_reports_csv<W: Write>(reports: &[PersonReport], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(SUMMARY_HEADERS)?;
    for report in reports {
        writer.write_record(report_record(report))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_reports_csv_to_path(reports: &[PersonReport], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_reports_csv(reports, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatsAggregator;
    use crate::table::parse;

    const DATA: &str = "Date,HomeTeam,AwayTeam,FTHG,FTAG,FTR,Tifoso,HS,AS
24/08/2025,Como,Lazio,2,0,H,Steppo,19,8
16/08/2025,Udinese,Como,0,2,A,Guzzo,,
";

    #[test]
    fn test_csv_output() {
        let table = parse(DATA, None).unwrap();
        let reports = StatsAggregator::default().reports(table.rows());

        let mut buf = Vec::new();
        write_reports_csv(&reports, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], SUMMARY_HEADERS.join(","));
        assert_eq!(lines[1], "Steppo,1,1,0,0,2,0,3,3.00,100.0,19,8,0,0,0,0,0,0,19.0,,");
        assert_eq!(lines[2], "Guzzo,1,1,0,0,2,0,3,3.00,100.0,0,0,0,0,0,0,0,0,,,");
    }

    #[test]
    fn test_csv_to_path() {
        let table = parse(DATA, None).unwrap();
        let reports = StatsAggregator::default().reports(table.rows());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");

        write_reports_csv_to_path(&reports, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), SUMMARY_HEADERS.len());
        assert_eq!(reader.records().count(), 2);
    }
}
