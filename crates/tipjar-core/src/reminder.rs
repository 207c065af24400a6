//! Weekly tip reminder content.
//!
//! Only the reminder text and its next fire time live here; handing the
//! reminder to a platform scheduler is left to the host.

use crate::calculator::format_currency;
use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REMINDER_WEEKDAY: Weekday = Weekday::Sun;
pub const DEFAULT_REMINDER_HOUR: u32 = 18;

/// A reminder that fires once a week at a fixed weekday and hour (UTC).
///
/// Serialized as the flat `reminder_weekday` / `reminder_hour` pair used in
/// `config.toml`; deserialized hours are clamped like [`WeeklyReminder::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReminderFields", into = "ReminderFields")]
pub struct WeeklyReminder {
    weekday: Weekday,
    hour: u32,
}

#[derive(Serialize, Deserialize)]
struct ReminderFields {
    reminder_weekday: Weekday,
    reminder_hour: u32,
}

impl From<ReminderFields> for WeeklyReminder {
    fn from(fields: ReminderFields) -> Self {
        Self::new(fields.reminder_weekday, fields.reminder_hour)
    }
}

impl From<WeeklyReminder> for ReminderFields {
    fn from(reminder: WeeklyReminder) -> Self {
        Self {
            reminder_weekday: reminder.weekday,
            reminder_hour: reminder.hour,
        }
    }
}

impl Default for WeeklyReminder {
    fn default() -> Self {
        Self::new(DEFAULT_REMINDER_WEEKDAY, DEFAULT_REMINDER_HOUR)
    }
}

impl WeeklyReminder {
    /// Creates a reminder; hours past 23 are clamped to 23.
    pub fn new(weekday: Weekday, hour: u32) -> Self {
        Self {
            weekday,
            hour: hour.min(23),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Notification body embedding the trailing seven-day tip sum.
    pub fn body(&self, last_week_tip_sum: f64, symbol: &str) -> String {
        if last_week_tip_sum > 0.0 {
            format!(
                "You tipped {} over the last 7 days.",
                format_currency(last_week_tip_sum, symbol)
            )
        } else {
            "No tips recorded in the last 7 days.".to_string()
        }
    }

    /// The first fire time strictly after `now`.
    pub fn next_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let target = i64::from(self.weekday.num_days_from_monday());
        let today = i64::from(now.weekday().num_days_from_monday());
        let days_ahead = (target - today).rem_euclid(7);

        let time = NaiveTime::from_hms_opt(self.hour, 0, 0).unwrap_or(NaiveTime::MIN);
        let candidate = (now.date_naive() + Duration::days(days_ahead))
            .and_time(time)
            .and_utc();

        if candidate > now {
            candidate
        } else {
            candidate + Duration::days(7)
        }
    }
}
