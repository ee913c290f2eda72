//! Punch Entity
//!
//! One recorded use of a card, attributed to a person.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::person::Person;

/// A punch embedded in a card; dates are RFC 3339 with optional fractional seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Punch {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub reason: String,
    /// The person who punched the card
    pub puncher: Person,
}

/// Request body for `POST /punch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPunch {
    pub card_id: i32,
    pub puncher_id: i32,
    pub date: DateTime<Utc>,
    pub reason: String,
}

impl AddPunch {
    /// Punch `card_id` now
    pub fn now(card_id: i32, puncher_id: i32, reason: String) -> Self {
        Self {
            card_id,
            puncher_id,
            date: Utc::now(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_add_punch_serializes_snake_case_keys() {
        let add = AddPunch {
            card_id: 1,
            puncher_id: 2,
            date: Utc.with_ymd_and_hms(2023, 1, 14, 10, 0, 0).unwrap(),
            reason: "late".to_string(),
        };
        let json = serde_json::to_value(&add).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["card_id", "date", "puncher_id", "reason"]);
        assert_eq!(obj["card_id"], 1);
        assert_eq!(obj["puncher_id"], 2);
        assert_eq!(obj["date"], "2023-01-14T10:00:00Z");
    }

    #[test]
    fn test_date_decodes_with_and_without_fraction() {
        let puncher = r#"{"id":2,"name":"A","email":null,"phone_number":null}"#;
        let whole = format!(
            r#"{{"id":1,"date":"2023-01-14T10:00:00Z","reason":"x","puncher":{}}}"#,
            puncher
        );
        let fractional = format!(
            r#"{{"id":1,"date":"2023-01-14T10:00:00.500Z","reason":"x","puncher":{}}}"#,
            puncher
        );

        let a: Punch = serde_json::from_str(&whole).unwrap();
        let b: Punch = serde_json::from_str(&fractional).unwrap();

        assert_eq!(a.date.timestamp(), b.date.timestamp());
        assert_eq!(a.date.nanosecond(), 0);
        assert_eq!(b.date.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_date_decodes_offset_form() {
        let puncher = r#"{"id":2,"name":"A","email":null,"phone_number":null}"#;
        let json = format!(
            r#"{{"id":1,"date":"2023-01-14T12:00:00+02:00","reason":"x","puncher":{}}}"#,
            puncher
        );
        let punch: Punch = serde_json::from_str(&json).unwrap();
        assert_eq!(punch.date, Utc.with_ymd_and_hms(2023, 1, 14, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let json = r#"{"id":1,"date":"yesterday","reason":"x","puncher":{"id":2,"name":"A","email":null,"phone_number":null}}"#;
        assert!(serde_json::from_str::<Punch>(json).is_err());
    }
}
