//! Daily practice streak.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted streak: the last active day and the run length ending there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakRecord {
    /// Last active day, `None` before the first visit (stored as `""`)
    #[serde(default, with = "date_field")]
    pub last_date: Option<NaiveDate>,

    /// Consecutive active days ending at `last_date`
    #[serde(default)]
    pub count: u32,
}

impl StreakRecord {
    /// The record after a visit on `today`.
    ///
    /// Same day leaves it unchanged, the day after extends it, anything
    /// else starts a new streak of one.
    pub fn advanced(&self, today: NaiveDate) -> StreakRecord {
        match self.last_date {
            Some(last) if last == today => self.clone(),
            Some(last) if last.succ_opt() == Some(today) => StreakRecord {
                last_date: Some(today),
                count: self.count + 1,
            },
            _ => StreakRecord {
                last_date: Some(today),
                count: 1,
            },
        }
    }
}

/// ISO dates stored as `"YYYY-MM-DD"`, empty string for none.
mod date_field {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format(FORMAT).to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.and_then(|s| NaiveDate::parse_from_str(&s, FORMAT).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_yesterday_extends_streak() {
        let record = StreakRecord { last_date: Some(day(9)), count: 4 };
        let next = record.advanced(day(10));
        assert_eq!(next.count, 5);
        assert_eq!(next.last_date, Some(day(10)));
    }

    #[test]
    fn test_gap_resets_streak() {
        let record = StreakRecord { last_date: Some(day(8)), count: 4 };
        assert_eq!(record.advanced(day(10)).count, 1);
    }

    #[test]
    fn test_same_day_is_unchanged() {
        let record = StreakRecord { last_date: Some(day(10)), count: 4 };
        assert_eq!(record.advanced(day(10)), record);
    }

    #[test]
    fn test_first_visit_starts_at_one() {
        let next = StreakRecord::default().advanced(day(1));
        assert_eq!(next.count, 1);
    }

    #[test]
    fn test_month_boundary_counts_as_yesterday() {
        let record = StreakRecord {
            last_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            count: 2,
        };
        assert_eq!(record.advanced(day(1)).count, 3);
    }

    #[test]
    fn test_empty_date_reads_as_none() {
        let record: StreakRecord = serde_json::from_str(r#"{"lastDate":"","count":0}"#).unwrap();
        assert_eq!(record, StreakRecord::default());
        let json = serde_json::to_string(&StreakRecord { last_date: Some(day(5)), count: 1 }).unwrap();
        assert_eq!(json, r#"{"lastDate":"2024-03-05","count":1}"#);
    }
}
