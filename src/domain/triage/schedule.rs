//! Worry-time schedule: the daily slot and the "next worry time" rule.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// The user's daily worry-time slot.
///
/// `duration` is shown to the user only; nothing schedules against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SettingsRecord")]
pub struct WorryTimeSettings {
    hour: u32,
    minute: u32,
    duration: u32,
}

/// Unvalidated wire shape.
#[derive(Deserialize)]
struct SettingsRecord {
    hour: u32,
    minute: u32,
    duration: u32,
}

impl TryFrom<SettingsRecord> for WorryTimeSettings {
    type Error = ValidationError;

    fn try_from(raw: SettingsRecord) -> Result<Self, Self::Error> {
        WorryTimeSettings::new(raw.hour, raw.minute, raw.duration)
    }
}

impl WorryTimeSettings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` for hour outside 0–23, minute outside 0–59, or a zero duration
    pub fn new(hour: u32, minute: u32, duration: u32) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::out_of_range("hour", 0, 23, clamp_i32(hour)));
        }
        if minute > 59 {
            return Err(ValidationError::out_of_range("minute", 0, 59, clamp_i32(minute)));
        }
        if duration == 0 || duration > 24 * 60 {
            return Err(ValidationError::out_of_range(
                "duration",
                1,
                24 * 60,
                clamp_i32(duration),
            ));
        }
        Ok(Self {
            hour,
            minute,
            duration,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Slot start as a wall-clock time.
    pub fn time_of_day(&self) -> NaiveTime {
        // Fields are range-checked at construction.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Next worry time strictly after `now`, in `now`'s zone.
    ///
    /// Today's slot if it is still ahead, otherwise the same wall-clock
    /// time on the following calendar date.
    pub fn next_occurrence<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateTime<Tz> {
        let tz = now.timezone();
        let today = now.date_naive();

        let candidate = resolve_local(&tz, today.and_time(self.time_of_day()));
        if candidate > *now {
            return candidate;
        }
        let tomorrow = today.succ_opt().unwrap_or(NaiveDate::MAX);
        resolve_local(&tz, tomorrow.and_time(self.time_of_day()))
    }
}

impl Default for WorryTimeSettings {
    /// 18:00 for 15 minutes.
    fn default() -> Self {
        Self {
            hour: 18,
            minute: 0,
            duration: 15,
        }
    }
}

impl fmt::Display for WorryTimeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Maps a wall-clock time onto an instant. Ambiguous times (clocks going
/// back) take the earlier instant. Skipped times (clocks going forward)
/// move to the end of the gap, so every slot inside one gap lands on the
/// same instant.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    // Offset transitions fall on whole minutes.
    let mut probe = naive;
    for _ in 0..=24 * 60 {
        if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
            return dt;
        }
        probe += chrono::Duration::minutes(1);
    }
    tz.from_utc_datetime(&naive)
}

fn clamp_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
