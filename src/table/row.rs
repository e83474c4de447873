use serde::ser::{Serialize, SerializeMap, Serializer};

/// One parsed body line: header name -> cell text, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    /// Build a row from (header, cell) pairs.
    ///
    /// A repeated header keeps its first position and takes the later cell.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: Vec<(String, String)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match fields.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => fields.push((key, value)),
            }
        }
        Self { fields }
    }

    /// Cell for `key`, if the column exists
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Cell for `key`, or an empty string when the column does not exist
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_missing_column() {
        let row = RawRow::from_pairs([("HomeTeam", "Como"), ("FTR", "H")]);
        assert_eq!(row.get("HomeTeam"), Some("Como"));
        assert_eq!(row.get("AwayTeam"), None);
        assert_eq!(row.value("AwayTeam"), "");
    }

    #[test]
    fn test_repeated_key_keeps_first_position() {
        let row = RawRow::from_pairs([("A", "1"), ("B", "2"), ("A", "3")]);
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(row.value("A"), "3");
    }

    #[test]
    fn test_serializes_in_header_order() {
        let row = RawRow::from_pairs([("Date", "24/08/2025"), ("HomeTeam", "Como")]);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"Date":"24/08/2025","HomeTeam":"Como"}"#);
    }
}
