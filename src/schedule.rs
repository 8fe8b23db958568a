//! Shift arithmetic and display formatting
//!
//! Everything here is a pure function of its inputs; the view calls these on
//! every render instead of storing derived values.

use chrono::{DateTime, Local, NaiveTime, TimeDelta, TimeZone};

/// Length of a work shift: 9 hours and 15 minutes
pub const SHIFT_SECONDS: u64 = 9 * 3600 + 15 * 60;

/// The shift length as a chrono duration
pub fn shift_length() -> TimeDelta {
    TimeDelta::hours(9) + TimeDelta::minutes(15)
}

/// Departure time for a given arrival
pub fn departure_time<Tz: TimeZone>(arrival: &DateTime<Tz>) -> DateTime<Tz> {
    arrival.clone() + shift_length()
}

/// Seconds left in the shift when `now` is reached, floored at zero.
///
/// Elapsed time is truncated to whole seconds. An arrival in the future
/// leaves more than a full shift remaining.
pub fn remaining_seconds<Tz: TimeZone>(arrival: &DateTime<Tz>, now: &DateTime<Tz>) -> u64 {
    let elapsed = now.clone().signed_duration_since(arrival.clone()).num_seconds();
    let remaining = SHIFT_SECONDS as i64 - elapsed;
    remaining.max(0) as u64
}

/// Format a departure instant as 24-hour `HH:mm`
pub fn format_clock<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%H:%M").to_string()
}

/// Format a remaining duration as positional `H:MM:SS`
pub fn format_remaining(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

/// Anchor an hour/minute picked by the user on the date of `reference`.
///
/// Falls back to the earliest mapping when the local time is ambiguous, and
/// to `reference` itself when it does not exist (inside a DST gap).
pub fn on_same_day(reference: &DateTime<Local>, time: NaiveTime) -> DateTime<Local> {
    let naive = reference.date_naive().and_time(time);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or(*reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn shift_is_nine_hours_fifteen() {
        assert_eq!(SHIFT_SECONDS, 33_300);
        assert_eq!(shift_length().num_seconds(), 33_300);
    }

    #[test]
    fn departure_adds_shift() {
        let arrival = utc(8, 0, 0);
        assert_eq!(departure_time(&arrival), utc(17, 15, 0));
        assert_eq!(format_clock(&departure_time(&arrival)), "17:15");
        assert_eq!(format_clock(&departure_time(&utc(9, 0, 0))), "18:15");
    }

    #[test]
    fn departure_crosses_midnight() {
        let arrival = utc(20, 30, 0);
        let departure = departure_time(&arrival);
        assert_eq!(format_clock(&departure), "05:45");
        assert_eq!(departure - arrival, shift_length());
    }

    #[test]
    fn remaining_counts_from_arrival() {
        let arrival = utc(9, 0, 0);
        assert_eq!(remaining_seconds(&arrival, &arrival), 33_300);
        assert_eq!(remaining_seconds(&arrival, &utc(9, 0, 5)), 33_295);
        assert_eq!(remaining_seconds(&arrival, &utc(18, 15, 0)), 0);
    }

    #[test]
    fn remaining_floors_at_zero() {
        let arrival = utc(6, 0, 0);
        assert_eq!(remaining_seconds(&arrival, &utc(23, 0, 0)), 0);
    }

    #[test]
    fn future_arrival_is_not_capped() {
        let arrival = utc(10, 0, 0);
        assert_eq!(remaining_seconds(&arrival, &utc(9, 0, 0)), 33_300 + 3600);
    }

    #[test]
    fn remaining_text_is_padded() {
        assert_eq!(format_remaining(33_300), "9:15:00");
        assert_eq!(format_remaining(33_295), "9:14:55");
        assert_eq!(format_remaining(61), "0:01:01");
        assert_eq!(format_remaining(0), "0:00:00");
        assert_eq!(format_remaining(36_000), "10:00:00");
    }
}
