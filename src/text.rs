use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::match_data::MatchRecord;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub home_name: String,
    pub away_name: String,
    pub formatted_date: String,
    pub upper_venue: String,
}
impl TextBlock {
    /// `None` if the kick-off time cannot be read.
    pub fn derive(record: &MatchRecord) -> Option<Self> {
        let kick_off = parse_datetime(&record.datetime)?;
        Some(Self {
            home_name: record.home_team.name.clone(),
            away_name: record.away_team.name.clone(),
            formatted_date: poster_date(&kick_off),
            upper_venue: record.location.to_uppercase(),
        })
    }
}

/// Reads an RFC 3339 timestamp, falling back to a naive date-time or a bare date taken as UTC.
pub fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `JUL 20, 2023`
pub fn poster_date(datetime: &DateTime<Utc>) -> String {
    datetime.format("%b %-d, %Y").to_string().to_uppercase()
}

/// `Jul 20, 2023`
pub fn listing_date(datetime: &DateTime<Utc>) -> String {
    datetime.format("%b %-d, %Y").to_string()
}
