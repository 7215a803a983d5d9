use chrono::{NaiveDate, NaiveDateTime, Utc};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

// Whole calendar days between the due date and `today`, never negative.
pub fn days_overdue(today: NaiveDate, due_at: NaiveDateTime) -> i64 {
    (today - due_at.date()).num_days().max(0)
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::{days_overdue, serializer};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[tokio::test]
    async fn test_should_count_whole_days_overdue() {
        let due = date(2024, 3, 1).and_hms_opt(23, 59, 0).expect("valid time");
        assert_eq!(0, days_overdue(date(2024, 3, 1), due));
        assert_eq!(1, days_overdue(date(2024, 3, 2), due));
        assert_eq!(10, days_overdue(date(2024, 3, 11), due));
    }

    #[tokio::test]
    async fn test_should_never_be_negative() {
        let due = date(2024, 3, 1).and_hms_opt(0, 0, 0).expect("valid time");
        assert_eq!(0, days_overdue(date(2024, 2, 1), due));
        assert_eq!(0, days_overdue(date(2024, 3, 1) - Duration::days(1), due));
    }

    #[tokio::test]
    async fn test_should_serialize_date_time() {
        let stamp = Stamp { at: date(2024, 3, 1).and_hms_milli_opt(4, 40, 35, 726).expect("valid time") };
        let json = serde_json::to_string(&stamp).expect("should serialize");
        assert_eq!(r#"{"at":"2024-03-01T04:40:35.726"}"#, json);
        let parsed: Stamp = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(stamp, parsed);
    }
}
