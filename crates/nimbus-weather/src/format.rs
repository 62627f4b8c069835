//! Display formatting for weather values.

/// Round to the nearest whole degree and append the Celsius suffix.
///
/// `f64::round` rounds half away from zero, matching how the values are
/// displayed upstream; the integer cast normalizes negative zero.
pub fn temperature(celsius: f64) -> String {
    format!("{}\u{b0}C", celsius.round() as i64)
}

/// Rounded relative humidity with a percent sign.
pub fn humidity(pct: f64) -> String {
    format!("{}%", pct.round() as i64)
}

/// Wind speed converted from the API's m/s to km/h, one decimal place.
pub fn wind_speed(meters_per_second: f64) -> String {
    format!("{:.1} km/h", meters_per_second * 3.6)
}

/// 12-hour clock label for an hourly forecast slot ("7 AM", "12 PM").
pub fn clock_label(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", display, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_rounding() {
        assert_eq!(temperature(0.0), "0\u{b0}C");
        assert_eq!(temperature(-0.4), "0\u{b0}C");
        assert_eq!(temperature(21.6), "22\u{b0}C");
        assert_eq!(temperature(21.4), "21\u{b0}C");
        assert_eq!(temperature(-5.5), "-6\u{b0}C");
    }

    #[test]
    fn test_humidity_rounding() {
        assert_eq!(humidity(54.4), "54%");
        assert_eq!(humidity(54.5), "55%");
        assert_eq!(humidity(100.0), "100%");
    }

    #[test]
    fn test_wind_speed_conversion() {
        assert_eq!(wind_speed(5.0), "18.0 km/h");
        assert_eq!(wind_speed(0.0), "0.0 km/h");
        assert_eq!(wind_speed(1.25), "4.5 km/h");
    }

    #[test]
    fn test_clock_label() {
        assert_eq!(clock_label(0), "12 AM");
        assert_eq!(clock_label(7), "7 AM");
        assert_eq!(clock_label(11), "11 AM");
        assert_eq!(clock_label(12), "12 PM");
        assert_eq!(clock_label(13), "1 PM");
        assert_eq!(clock_label(23), "11 PM");
    }
}
