//! Domain types for the calendar lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Hijri (year, month, day) triple.
///
/// Displays as the human-readable label used in conversion responses,
/// e.g. `1-1-1446 AH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{} AH", self.day, self.month, self.year)
    }
}

/// One row of the lookup table: a Hijri date and its precomputed Gregorian
/// equivalent.
///
/// The table is externally curated and read-only; the service trusts the
/// data and performs no validation of month lengths or sequence contiguity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Gregorian date string as stored (`YYYY-MM-DD`). Compared verbatim in
    /// lookups; never parsed.
    pub gregorian: String,
}

impl CalendarEntry {
    /// The Hijri triple of this row.
    pub fn hijri(&self) -> HijriDate {
        HijriDate::new(self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hijri_label_format() {
        let date = HijriDate::new(1446, 1, 1);
        assert_eq!(date.to_string(), "1-1-1446 AH");

        let date = HijriDate::new(1447, 12, 30);
        assert_eq!(date.to_string(), "30-12-1447 AH");
    }

    #[test]
    fn test_entry_hijri_triple() {
        let entry = CalendarEntry {
            year: 1446,
            month: 2,
            day: 15,
            gregorian: "2024-08-19".to_string(),
        };
        assert_eq!(entry.hijri(), HijriDate::new(1446, 2, 15));
        assert_eq!(entry.hijri().to_string(), "15-2-1446 AH");
    }

    #[test]
    fn test_entry_serialization() {
        let entry = CalendarEntry {
            year: 1446,
            month: 1,
            day: 1,
            gregorian: "2024-07-07".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["year"], 1446);
        assert_eq!(json["gregorian"], "2024-07-07");
    }
}
