//! Data Transfer Objects for the HTTP API.
//!
//! Query parameter structs and response payloads for all endpoints. The
//! year listing uses an explicit ordered month grouping so the wire shape
//! never depends on map iteration order.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::models::CalendarEntry;

/// Query parameters for the Hijri → Gregorian conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct HijriQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Query parameters for the Gregorian → Hijri conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct GregorianQuery {
    pub date: String,
}

/// Query parameters for the month listing.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

/// Query parameters for the year listing.
#[derive(Debug, Clone, Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

/// Status check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

/// Hijri → Gregorian conversion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HijriToGregorianResponse {
    /// Human-readable Hijri label, `{day}-{month}-{year} AH`
    pub hijri: String,
    /// Stored Gregorian date string
    pub gregorian: String,
}

/// Gregorian → Hijri conversion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GregorianToHijriResponse {
    /// The query date, echoed back unmodified
    pub gregorian: String,
    /// Human-readable Hijri label, `{day}-{month}-{year} AH`
    pub hijri: String,
}

/// One day of a month or year listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: u32,
    pub gregorian: String,
}

impl From<CalendarEntry> for DayEntry {
    fn from(entry: CalendarEntry) -> Self {
        Self {
            day: entry.day,
            gregorian: entry.gregorian,
        }
    }
}

/// Month listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthResponse {
    pub year: i32,
    pub month: u32,
    /// Days in ascending day order
    pub days: Vec<DayEntry>,
}

/// Year listing response.
#[derive(Debug, Clone, Serialize)]
pub struct YearResponse {
    pub year: i32,
    pub months: MonthGroups,
}

/// Ordered month → days grouping for the year listing.
///
/// Built in one pass over the (month, day)-sorted flat rows: each entry is
/// appended to the bucket for its month, with the bucket created on first
/// sight. Serializes as a JSON object whose keys are the month numbers
/// rendered as strings ("1", "2", …), emitted in bucket order.
#[derive(Debug, Clone, Default)]
pub struct MonthGroups(Vec<(u32, Vec<DayEntry>)>);

impl MonthGroups {
    /// Group sorted rows by month, preserving first-seen month order.
    pub fn from_sorted_entries(entries: Vec<CalendarEntry>) -> Self {
        let mut groups: Vec<(u32, Vec<DayEntry>)> = Vec::new();
        for entry in entries {
            let month = entry.month;
            match groups.iter().position(|(m, _)| *m == month) {
                Some(idx) => groups[idx].1.push(entry.into()),
                None => groups.push((month, vec![entry.into()])),
            }
        }
        Self(groups)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Month buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &(u32, Vec<DayEntry>)> {
        self.0.iter()
    }
}

impl Serialize for MonthGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (month, days) in &self.0 {
            map.serialize_entry(&month.to_string(), days)?;
        }
        map.end()
    }
}

/// Miqaat placeholder response (private endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiqaatResponse {
    pub miqaat: String,
}

/// Device sync acknowledgement (private endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSyncResponse {
    pub message: String,
}

/// Firmware update flag (private endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmwareUpdateResponse {
    pub update: bool,
}
