use crate::model::{Columns, MatchRecord};
use crate::table::RawRow;

/// Rows attended by one of the tracked supporters, in file order.
///
/// Any other attendee value, including "N" for nobody, is not a match for
/// anyone.
pub fn attended<'a>(rows: &'a [RawRow], columns: &Columns, tracked: &[String]) -> Vec<&'a RawRow> {
    rows.iter()
        .filter(|row| {
            let attendee = MatchRecord::new(row, columns).attendee();
            tracked.iter().any(|p| p == attendee)
        })
        .collect()
}

/// Distinct non-empty attendee values with their row counts, in first-seen order
pub fn attendee_counts(rows: &[RawRow], person_key: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for row in rows {
        let value = row.value(person_key).trim();
        if value.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(name, _)| name == value) {
            Some(entry) => entry.1 += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts
}

/// Distinct non-empty attendee values, in first-seen order
pub fn attendee_values(rows: &[RawRow], person_key: &str) -> Vec<String> {
    attendee_counts(rows, person_key)
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse;

    const DATA: &str = "Date,HomeTeam,Tifoso
01/09/2025,Como,Steppo
08/09/2025,Como,N
15/09/2025,Como,
22/09/2025,Como, Guzzo
29/09/2025,Como,Steppo
06/10/2025,Como,Zio
";

    fn tracked() -> Vec<String> {
        vec!["Steppo".to_string(), "Guzzo".to_string()]
    }

    #[test]
    fn test_attended_filters_untracked_values() {
        let table = parse(DATA, None).unwrap();
        let rows = attended(table.rows(), &Columns::default(), &tracked());
        let dates: Vec<&str> = rows.iter().map(|r| r.value("Date")).collect();
        assert_eq!(dates, vec!["01/09/2025", "22/09/2025", "29/09/2025"]);
    }

    #[test]
    fn test_attendee_values() {
        let table = parse(DATA, None).unwrap();
        assert_eq!(
            attendee_values(table.rows(), "Tifoso"),
            vec!["Steppo", "N", "Guzzo", "Zio"]
        );
    }

    #[test]
    fn test_attendee_counts() {
        let table = parse(DATA, None).unwrap();
        let counts = attendee_counts(table.rows(), "Tifoso");
        assert_eq!(counts[0], ("Steppo".to_string(), 2));
        assert_eq!(counts[1], ("N".to_string(), 1));
    }

    #[test]
    fn test_missing_person_column() {
        let table = parse(DATA, None).unwrap();
        assert!(attendee_values(table.rows(), "Presente").is_empty());
        assert!(attended(table.rows(), &Columns::new().with_person("Presente"), &tracked()).is_empty());
    }
}
