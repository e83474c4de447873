//! Data-quality checks for a match file.
//!
//! Aggregation never fails on bad cells; this module reports them so the
//! file can be fixed at the source.

use crate::model::{parse_int, Columns, FullTimeResult, MatchRecord};
use crate::table::CsvTable;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    MissingColumn { column: String },
    MissingDate,
    MissingHomeTeam,
    UnknownResult { value: String },
    NonNumericGoals { column: String, value: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingColumn { column } => write!(f, "missing column '{}'", column),
            Issue::MissingDate => write!(f, "no date"),
            Issue::MissingHomeTeam => write!(f, "no home team"),
            Issue::UnknownResult { value } => {
                write!(f, "result '{}' is not one of H, A, D", value)
            }
            Issue::NonNumericGoals { column, value } => {
                write!(f, "{} '{}' is not a number", column, value)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowIssue {
    /// 1-based data row, `None` for header problems
    pub row: Option<usize>,
    pub issue: Issue,
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "Row {}: {}", row, self.issue),
            None => write!(f, "Header: {}", self.issue),
        }
    }
}

/// Check the header and every row
pub fn check(table: &CsvTable, columns: &Columns) -> Vec<RowIssue> {
    let mut issues: Vec<RowIssue> = columns
        .required()
        .iter()
        .filter(|c| !table.has_column(c))
        .map(|c| RowIssue {
            row: None,
            issue: Issue::MissingColumn {
                column: c.to_string(),
            },
        })
        .collect();

    let has = |c: &str| table.has_column(c);

    for (idx, row) in table.rows().iter().enumerate() {
        let record = MatchRecord::new(row, columns);
        let mut push = |issue| issues.push(RowIssue { row: Some(idx + 1), issue });

        if !record.is_complete() {
            if has(&columns.date) && record.date().is_empty() {
                push(Issue::MissingDate);
            }
            if has(&columns.home_team) && record.home_team().is_empty() {
                push(Issue::MissingHomeTeam);
            }
        }
        if has(&columns.result) {
            let value = row.value(&columns.result);
            if FullTimeResult::from_tag(value).is_none() {
                push(Issue::UnknownResult {
                    value: value.to_string(),
                });
            }
        }
        for column in [&columns.home_goals, &columns.away_goals] {
            let value = row.value(column);
            if has(column) && !value.is_empty() && parse_int(value).is_none() {
                push(Issue::NonNumericGoals {
                    column: column.clone(),
                    value: value.to_string(),
                });
            }
        }
    }

    issues
}
