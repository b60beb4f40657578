use std::fmt;
use std::str::FromStr;

use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::foundation::error::{AvatarError, AvatarResult};

const DAY_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// UTC calendar day (`YYYY-MM-DD`) mixed into the digest.
///
/// For a fixed input the avatar changes once per day unless the caller pins the day.
/// Years run from -9999 to 9999; negative years keep four digits after the sign.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeKey(String);

impl TimeKey {
    pub fn from_date(date: Date) -> Self {
        let sign = if date.year() < 0 { "-" } else { "" };
        Self(format!(
            "{sign}{:04}-{:02}-{:02}",
            date.year().unsigned_abs(),
            u8::from(date.month()),
            date.day()
        ))
    }

    /// Day of a Unix timestamp (seconds), in UTC. Instants outside years -9999..=9999
    /// are a validation error.
    pub fn from_unix(secs: i64) -> AvatarResult<Self> {
        let at = OffsetDateTime::from_unix_timestamp(secs)
            .map_err(|e| AvatarError::validation(format!("timestamp {secs} out of range: {e}")))?;
        Ok(Self::from_date(at.date()))
    }

    pub fn now() -> Self {
        Self::from_date(OffsetDateTime::now_utc().date())
    }

    /// Resolves an optional query-style timestamp; absent or blank means today.
    pub fn resolve(raw: Option<&str>) -> AvatarResult<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::now()),
            Some(raw) => {
                let secs: i64 = raw
                    .parse()
                    .map_err(|_| AvatarError::validation(format!("invalid timestamp '{raw}'")))?;
                Self::from_unix(secs)
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TimeKey {
    type Err = AvatarError;

    fn from_str(s: &str) -> AvatarResult<Self> {
        let date = Date::parse(s.trim(), DAY_FORMAT)
            .map_err(|e| AvatarError::validation(format!("invalid day '{s}': {e}")))?;
        Ok(Self::from_date(date))
    }
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seed/time_key.rs"]
mod tests;
