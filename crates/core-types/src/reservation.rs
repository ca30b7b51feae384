use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reservation for a party at the restaurant.
///
/// Maps one-to-one with a row of the `reservations` table. `customer_id`
/// is a weak reference by value to the owning customer's row; a
/// reservation never exists without one. Reservations are append-only:
/// once saved they are never updated, and the database-assigned id is not
/// read back on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Option<i64>,
    pub customer_id: i64,
    pub num_guests: i32,
    pub start_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl Reservation {
    /// Creates a not-yet-persisted reservation from user-supplied fields.
    pub fn new(
        customer_id: i64,
        num_guests: i32,
        start_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: None,
            customer_id,
            num_guests,
            start_at,
            notes,
        }
    }

    /// Renders `start_at` for display, e.g. `"June 3rd 2024, 1:30 pm"`:
    /// full month name, day of month with its ordinal suffix, four-digit
    /// year, then 12-hour time with a lowercase am/pm marker. Always UTC,
    /// always English month names.
    pub fn formatted_start_at(&self) -> String {
        let day = self.start_at.day();
        format!(
            "{} {}{} {}, {}",
            self.start_at.format("%B"),
            day,
            ordinal_suffix(day),
            self.start_at.format("%Y"),
            self.start_at.format("%-I:%M %P"),
        )
    }
}

/// The English ordinal suffix for a day of the month (1st, 2nd, 3rd, 4th...).
/// 11 through 13 take "th" despite ending in 1, 2 and 3.
fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
