//! Day/night classification for icon selection.
//!
//! The current observation and the hourly forecast use different hour
//! boundaries. The mismatch is inherited behavior and is kept as two
//! separate rules until product decides which one is right.

use chrono::{DateTime, FixedOffset, Local, Timelike};

/// Hour-of-day of a provider timestamp on the machine's clock.
///
/// The API delivers UTC timestamps; day/night classification and clock
/// labels follow the user's wall time.
pub fn local_hour(timestamp: DateTime<FixedOffset>) -> u32 {
    timestamp.with_timezone(&Local).hour()
}

/// Daytime rule for the current observation: 07:00 inclusive to 19:00
/// exclusive.
pub fn is_daytime_current(hour: u32) -> bool {
    (7..19).contains(&hour)
}

/// Daytime rule for hourly forecast entries: strictly after 06:00 and
/// strictly before 18:00.
pub fn is_daytime_hourly(hour: u32) -> bool {
    hour > 6 && hour < 18
}
