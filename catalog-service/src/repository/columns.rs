//! Static field-name to column-name tables
//!
//! Each entity kind declares a [`ColumnMap`] listing the external field names a
//! client may sort by and the column each one reads. Both the protobuf field
//! name (`meeting_id`) and its JSON rendering (`meetingId`) are listed so either
//! spelling resolves. Lookup is exact and case-sensitive.

/// Explicit mapping from external field names to store columns
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    entries: &'static [(&'static str, &'static str)],
}

impl ColumnMap {
    /// Build a column map from a static table
    ///
    /// # Panics
    ///
    /// Panics if a name or column is empty, or if an external name appears
    /// twice. Tables are `const` data, so this fails on first use rather than
    /// at request time.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut i = 0;
        while i < entries.len() {
            assert!(!entries[i].0.is_empty(), "empty field name in column map");
            assert!(!entries[i].1.is_empty(), "empty column name in column map");
            let mut j = i + 1;
            while j < entries.len() {
                assert!(
                    !const_str_eq(entries[i].0, entries[j].0),
                    "duplicate field name in column map"
                );
                j += 1;
            }
            i += 1;
        }
        Self { entries }
    }

    /// Resolve an external field name to its column
    pub fn resolve(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
    }

    /// All external field names accepted by this map
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: ColumnMap = ColumnMap::new(&[
        ("id", "id"),
        ("meeting_id", "meeting_id"),
        ("meetingId", "meeting_id"),
    ]);

    #[test]
    fn test_resolves_both_spellings() {
        assert_eq!(MAP.resolve("meeting_id"), Some("meeting_id"));
        assert_eq!(MAP.resolve("meetingId"), Some("meeting_id"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(MAP.resolve("ID"), None);
        assert_eq!(MAP.resolve("MeetingId"), None);
    }

    #[test]
    fn test_partial_names_do_not_match() {
        assert_eq!(MAP.resolve("meeting"), None);
        assert_eq!(MAP.resolve(""), None);
    }

    #[test]
    fn test_fields_lists_every_entry() {
        let fields: Vec<_> = MAP.fields().collect();
        assert_eq!(fields, vec!["id", "meeting_id", "meetingId"]);
    }

    #[test]
    #[should_panic(expected = "duplicate field name")]
    fn test_duplicate_names_are_rejected() {
        static DUPES: [(&str, &str); 2] = [("name", "name"), ("name", "title")];
        let _ = ColumnMap::new(&DUPES);
    }
}
