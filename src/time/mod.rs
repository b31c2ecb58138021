//! UTC timestamps for message logs
//!
//! Timestamps are rendered as zero-padded `HH:MM:SS` in UTC. The clock is
//! injectable so callers and tests can pin the time.
//!
//! # Examples
//!
//! ```
//! use avfreq::time::{timestamp_with, FixedClock};
//! use chrono::{TimeZone, Utc};
//!
//! let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 7, 5, 9).unwrap());
//! assert_eq!(timestamp_with(&clock), "07:05:09");
//! ```

mod clock;

pub use self::clock::{Clock, FixedClock, SystemClock};

use chrono::{DateTime, Utc};

/// Formats a UTC instant as `HH:MM:SS`
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Current time from `clock` as `HH:MM:SS`
pub fn timestamp_with<C: Clock>(clock: &C) -> String {
    format_timestamp(clock.now())
}

/// Current UTC time as `HH:MM:SS`
pub fn current_timestamp() -> String {
    timestamp_with(&SystemClock)
}
