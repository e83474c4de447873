use super::delimited::SUMMARY_HEADERS;
use crate::error::Result;
use crate::model::{Fixed, Outcome, PersonReport, Venue};
use crate::stats::TimelineEntry;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

/// Write a workbook with a `Summary` sheet (one row per supporter) and a
/// `Matches` sheet (attended matches in date order)
pub fn write_reports_xlsx(
    reports: &[PersonReport],
    timeline: &[TimelineEntry],
    path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    write_summary_sheet(worksheet, reports)?;

    let worksheet = workbook.add_worksheet();
    write_matches_sheet(worksheet, timeline)?;

    workbook.save(path)?;
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border_bottom(FormatBorder::Thin)
}

fn write_fixed(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<Fixed>,
    format: &Format,
) -> Result<()> {
    if let Some(value) = value {
        sheet.write_number_with_format(row, col, value.to_f64(), format)?;
    }
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, reports: &[PersonReport]) -> Result<()> {
    sheet.set_name("Summary")?;
    sheet.set_column_width(0, 14)?;

    let header_format = header_format();
    for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    let count_format = Format::new().set_align(FormatAlign::Center);
    let two_places = Format::new()
        .set_align(FormatAlign::Center)
        .set_num_format("0.00");
    let one_place = Format::new()
        .set_align(FormatAlign::Center)
        .set_num_format("0.0");

    for (row_idx, report) in reports.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let s = &report.summary;
        let x = &report.extended;

        sheet.write_string(row, 0, &report.person)?;

        let counts = [
            (1, s.total_matches),
            (2, s.wins),
            (3, s.draws),
            (4, s.losses),
            (5, s.goals_for),
            (6, s.goals_against),
            (7, s.points),
            (10, x.shots_for),
            (11, x.shots_against),
            (12, x.shots_on_target_for),
            (13, x.shots_on_target_against),
            (14, x.corners_for),
            (15, x.corners_against),
            (16, x.yellow_cards),
            (17, x.red_cards),
        ];
        for (col, value) in counts {
            sheet.write_number_with_format(row, col, value as f64, &count_format)?;
        }

        write_fixed(sheet, row, 8, Some(s.points_per_game), &two_places)?;
        write_fixed(sheet, row, 9, Some(s.win_rate_percent), &one_place)?;
        write_fixed(sheet, row, 18, x.avg_shots_for, &one_place)?;
        write_fixed(sheet, row, 19, x.avg_shots_on_target_for, &one_place)?;
        write_fixed(sheet, row, 20, x.avg_corners_for, &one_place)?;
    }

    Ok(())
}

fn write_matches_sheet(sheet: &mut Worksheet, timeline: &[TimelineEntry]) -> Result<()> {
    sheet.set_name("Matches")?;
    sheet.set_column_width(0, 12)?; // Date
    sheet.set_column_width(1, 12)?; // Supporter
    sheet.set_column_width(2, 18)?; // Opponent
    sheet.set_column_width(3, 8)?; // Venue
    sheet.set_column_width(4, 8)?; // Score
    sheet.set_column_width(5, 8)?; // Outcome

    let header_format = header_format();
    let headers = ["Date", "Supporter", "Opponent", "Venue", "Score", "Outcome"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    let center = Format::new().set_align(FormatAlign::Center);
    let win = center.clone().set_font_color(Color::Green);
    let loss = center.clone().set_font_color(Color::Red);

    for (row_idx, entry) in timeline.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        sheet.write_string_with_format(row, 0, &entry.date, &center)?;
        sheet.write_string(row, 1, &entry.attendee)?;
        sheet.write_string(row, 2, &entry.opponent)?;

        let venue = match entry.venue {
            Venue::Home => "Home",
            Venue::Away => "Away",
        };
        sheet.write_string_with_format(row, 3, venue, &center)?;
        sheet.write_string_with_format(row, 4, &entry.score(), &center)?;

        let outcome_format = match entry.outcome {
            Outcome::Win => &win,
            Outcome::Draw => &center,
            Outcome::Loss => &loss,
        };
        sheet.write_string_with_format(row, 5, &entry.outcome.to_string(), outcome_format)?;
    }

    Ok(())
}
