use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{ToResponse, ToSchema};

use crate::models::timestamp_error::TimestampError;

/// The number of seconds since the Unix epoch (00:00:00 UTC on 1 Jan 1970).
///
/// The timestamp is always positive, but represented as a signed integer
/// because that's the standard on Unix systems and allows easy subtraction
/// to compute durations.
pub type UnixTimestamp = i64;

/// UTC rendering used for the `natural` field, e.g.
/// `2015-12-15 00:00:00 +0000 UTC`.
pub const NATURAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S +0000 UTC";

/// Input layout for natural language dates, e.g. `December 15, 2015`.
const DATE_LAYOUT: &str = "%B %e, %Y";
/// Same layout with the comma left out, e.g. `December 15 2015`.
const DATE_LAYOUT_NO_COMMA: &str = "%B %e %Y";

/// `%B` also accepts abbreviated month names when parsing, so the month
/// word is checked against the full names before chrono sees the input.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Both representations of a resolved instant, as returned to the client.
///
/// Either both fields are set and denote the same instant, or both are
/// `None` after a failed resolution. No partial state is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, ToResponse)]
pub struct Timestamp {
    pub unix: Option<UnixTimestamp>,
    pub natural: Option<String>,
}

impl Timestamp {
    /// Resolves a raw path segment into both timestamp representations.
    ///
    /// A segment that reads as a base-10 signed 64-bit integer is treated
    /// as epoch seconds; anything else is matched against the natural
    /// date layout.
    pub fn resolve(input: &str) -> Result<Self, TimestampError> {
        match input.parse::<UnixTimestamp>() {
            Ok(epoch) => Self::from_epoch(epoch),
            Err(_) => Self::from_date_string(input),
        }
    }

    /// Resolves epoch seconds into both representations.
    pub fn from_epoch(epoch: UnixTimestamp) -> Result<Self, TimestampError> {
        if epoch < 0 {
            return Err(TimestampError::InvalidTimestamp(
                "value less than 0".to_owned(),
            ));
        }
        DateTime::from_timestamp(epoch, 0)
            .map(|instant| Self::from_instant(&instant))
            .ok_or_else(|| TimestampError::InvalidTimestamp(format!("value {epoch} is out of range")))
    }

    /// Resolves a natural language date into the timestamp of midnight UTC
    /// on that calendar date.
    pub fn from_date_string(input: &str) -> Result<Self, TimestampError> {
        let date = parse_date_layout(input)?;
        let instant = date.and_time(NaiveTime::MIN).and_utc();
        Ok(Self::from_instant(&instant))
    }

    fn from_instant(instant: &DateTime<Utc>) -> Self {
        Self {
            unix: Some(instant.timestamp()),
            natural: Some(instant.format(NATURAL_FORMAT).to_string()),
        }
    }
}

/// Matches `input` against the natural date layout, comma optional.
///
/// The month word must be a full English month name; the comparison is
/// ASCII case-insensitive, like the layout matching of most date parsers.
fn parse_date_layout(input: &str) -> Result<NaiveDate, TimestampError> {
    let month = input.split_whitespace().next().unwrap_or_default();
    if !MONTH_NAMES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(month))
    {
        return Err(TimestampError::InvalidFormat(format!(
            "`{month}` is not a full month name"
        )));
    }
    match NaiveDate::parse_from_str(input, DATE_LAYOUT) {
        Ok(date) => Ok(date),
        // Keep the primary layout's diagnostic if both attempts fail.
        Err(err) => NaiveDate::parse_from_str(input, DATE_LAYOUT_NO_COMMA)
            .map_err(|_| TimestampError::InvalidFormat(err.to_string())),
    }
}
