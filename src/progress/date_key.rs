use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("invalid day key '{input}', expected YYYY-MM-DD")]
pub struct DayKeyError {
    pub input: String,
}

/// A local calendar day. Ordering is chronological, which also matches the
/// lexicographic ordering of the `YYYY-MM-DD` string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Today in the local timezone.
    pub fn today() -> Self {
        day_key_of(&Local::now())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    pub fn pred(&self) -> Self {
        self.add_days(-1)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = DayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DAY_KEY_FORMAT)
            .map(DayKey)
            .map_err(|_| DayKeyError {
                input: s.to_string(),
            })
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Truncate an instant to the calendar date of its own timezone.
pub fn day_key_of<Tz: TimeZone>(instant: &DateTime<Tz>) -> DayKey {
    DayKey(instant.date_naive())
}

/// Signed number of days from `a` to `b`.
pub fn days_between(a: DayKey, b: DayKey) -> i64 {
    (b.0 - a.0).num_days()
}

/// Most recent Monday at or before `day`.
pub fn week_start(day: DayKey) -> DayKey {
    let offset = day.0.weekday().num_days_from_monday() as i64;
    day.add_days(-offset)
}

/// The seven keys Monday..Sunday of the week containing `day`.
pub fn week_days(day: DayKey) -> [DayKey; 7] {
    let monday = week_start(day);
    std::array::from_fn(|i| monday.add_days(i as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn key(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let k = key("2024-03-09");
        assert_eq!(k.to_string(), "2024-03-09");
        assert_eq!(key(&k.to_string()), k);
    }

    #[test]
    fn test_malformed_key_is_rejected() {
        assert!("2024/03/09".parse::<DayKey>().is_err());
        assert!("yesterday".parse::<DayKey>().is_err());
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let a = key("2023-12-31");
        let b = key("2024-01-01");
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_day_key_uses_instant_timezone() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let late = tz.with_ymd_and_hms(2024, 5, 5, 23, 30, 0).unwrap();
        assert_eq!(day_key_of(&late), key("2024-05-05"));
        let utc = late.with_timezone(&chrono::Utc);
        assert_eq!(day_key_of(&utc), key("2024-05-05"));

        // Just past midnight at UTC+9 is still the previous day in UTC
        let after_midnight = tz.with_ymd_and_hms(2024, 5, 6, 0, 10, 0).unwrap();
        assert_eq!(day_key_of(&after_midnight), key("2024-05-06"));
        assert_eq!(day_key_of(&after_midnight.with_timezone(&chrono::Utc)), key("2024-05-05"));
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(key("2024-02-27"), key("2024-03-01")), 3);
        assert_eq!(days_between(key("2024-03-01"), key("2024-02-27")), -3);
        assert_eq!(days_between(key("2024-03-01"), key("2024-03-01")), 0);
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-05-08 is a Wednesday
        assert_eq!(week_start(key("2024-05-08")), key("2024-05-06"));
        assert_eq!(week_start(key("2024-05-06")), key("2024-05-06"));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(week_start(key("2024-05-12")), key("2024-05-06"));
    }

    #[test]
    fn test_week_days_span_monday_to_sunday() {
        let days = week_days(key("2024-05-08"));
        assert_eq!(days[0], key("2024-05-06"));
        assert_eq!(days[6], key("2024-05-12"));
    }

    #[test]
    fn test_serde_uses_string_form() {
        let json = serde_json::to_string(&key("2024-01-02")).unwrap();
        assert_eq!(json, "\"2024-01-02\"");
        let back: DayKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key("2024-01-02"));
        assert!(serde_json::from_str::<DayKey>("\"02/01/2024\"").is_err());
    }
}
