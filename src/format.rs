//! Display Formatting
//!
//! Text shown for cards and punches.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::models::Card;

/// Medium date, short time in the local timezone, e.g. "Jan 14, 2023, 10:00 AM"
pub fn punch_date(date: &DateTime<Utc>) -> String {
    punch_date_in(date, &Local)
}

pub fn punch_date_in<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.with_timezone(tz).format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// "2 punched / 10 total"
pub fn summary(card: &Card) -> String {
    format!("{} punched / {} total", card.punches.len(), card.capacity)
}

/// "all 10 slots punched" or "8 / 10 unpunched"
pub fn remaining(card: &Card) -> String {
    let capacity = card.capacity.max(0) as usize;
    let left = capacity.saturating_sub(card.punches.len());
    if left == 0 {
        format!("all {} slots punched", capacity)
    } else {
        format!("{} / {} unpunched", left, capacity)
    }
}

pub fn delete_prompt(title: &str) -> String {
    format!("Are you sure you want to delete \"{}\"?", title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn card(capacity: i32, punches: usize) -> Card {
        let json = format!(
            r#"{{"id":1,"title":"T","capacity":{},"punches":[{}]}}"#,
            capacity,
            (0..punches)
                .map(|i| format!(
                    r#"{{"id":{},"date":"2023-01-14T10:00:00Z","reason":"r","puncher":{{"id":1,"name":"A","email":null,"phone_number":null}}}}"#,
                    i
                ))
                .collect::<Vec<_>>()
                .join(",")
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_punch_date_in_timezone() {
        let date = Utc.with_ymd_and_hms(2023, 1, 14, 10, 5, 0).unwrap();
        assert_eq!(punch_date_in(&date, &Utc), "Jan 14, 2023, 10:05 AM");

        let plus_nine = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(punch_date_in(&date, &plus_nine), "Jan 14, 2023, 7:05 PM");
    }

    #[test]
    fn test_summary_and_remaining() {
        assert_eq!(summary(&card(10, 2)), "2 punched / 10 total");
        assert_eq!(remaining(&card(10, 2)), "8 / 10 unpunched");
        assert_eq!(remaining(&card(3, 3)), "all 3 slots punched");
    }

    #[test]
    fn test_delete_prompt() {
        assert_eq!(delete_prompt("Gym"), "Are you sure you want to delete \"Gym\"?");
    }
}
