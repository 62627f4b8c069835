//! Presenter: turns weather data into writes against a render surface.

use nimbus_weather::{codes, daytime, format, CurrentObservation, HourlyInterval};

/// Number of forecast slots shown after the current hour.
const HOURLY_SLOTS: usize = 12;

/// The widget's display regions as named write-only sinks.
///
/// One method per region; implementations decide how (and when) the
/// writes become visible.
pub trait RenderSurface {
    fn set_location(&mut self, text: &str);
    fn set_temperature(&mut self, text: &str);
    fn set_description(&mut self, text: &str);
    fn set_icon(&mut self, glyph: &str);
    fn set_humidity(&mut self, text: &str);
    fn set_wind_speed(&mut self, text: &str);

    /// Drop any previously rendered hourly entries.
    fn clear_hourly(&mut self);

    /// Append one hourly entry after the existing ones.
    fn push_hourly(&mut self, time: &str, glyph: &str, temperature: &str);

    fn set_error(&mut self, text: &str);
}

/// Writes weather data into an injected [`RenderSurface`].
pub struct Presenter<S: RenderSurface> {
    surface: S,
}

impl<S: RenderSurface> Presenter<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Render the current observation into the fixed regions.
    pub fn render_current(
        &mut self,
        observation: &CurrentObservation,
        is_daytime: bool,
        location_label: &str,
    ) {
        let resolved = codes::resolve(observation.weather_code);

        self.surface.set_location(location_label);
        self.surface
            .set_temperature(&format::temperature(observation.temperature_c));
        self.surface.set_description(resolved.description);
        self.surface
            .set_humidity(&format::humidity(observation.humidity_pct));
        self.surface
            .set_wind_speed(&format::wind_speed(observation.wind_speed_ms));
        self.surface
            .set_icon(codes::glyph(resolved.category, is_daytime));
    }

    /// Render the next twelve forecast hours.
    ///
    /// Index 0 of the supplied sequence is the hour already in progress
    /// and is skipped; a shorter sequence renders whatever tail exists.
    pub fn render_hourly(&mut self, intervals: &[HourlyInterval]) {
        self.surface.clear_hourly();

        for interval in intervals.iter().skip(1).take(HOURLY_SLOTS) {
            let hour = daytime::local_hour(interval.start_time);
            let is_day = daytime::is_daytime_hourly(hour);
            let resolved = codes::resolve(interval.weather_code);

            self.surface.push_hourly(
                &format::clock_label(hour),
                codes::glyph(resolved.category, is_day),
                &format::temperature(interval.temperature_c),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

    /// Records every write for assertions.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        location: String,
        temperature: String,
        description: String,
        icon: String,
        humidity: String,
        wind_speed: String,
        hourly: Vec<(String, String, String)>,
        hourly_clears: usize,
        error: String,
    }

    impl RenderSurface for RecordingSurface {
        fn set_location(&mut self, text: &str) {
            self.location = text.to_string();
        }
        fn set_temperature(&mut self, text: &str) {
            self.temperature = text.to_string();
        }
        fn set_description(&mut self, text: &str) {
            self.description = text.to_string();
        }
        fn set_icon(&mut self, glyph: &str) {
            self.icon = glyph.to_string();
        }
        fn set_humidity(&mut self, text: &str) {
            self.humidity = text.to_string();
        }
        fn set_wind_speed(&mut self, text: &str) {
            self.wind_speed = text.to_string();
        }
        fn clear_hourly(&mut self) {
            self.hourly.clear();
            self.hourly_clears += 1;
        }
        fn push_hourly(&mut self, time: &str, glyph: &str, temperature: &str) {
            self.hourly
                .push((time.to_string(), glyph.to_string(), temperature.to_string()));
        }
        fn set_error(&mut self, text: &str) {
            self.error = text.to_string();
        }
    }

    /// Timestamp whose machine-local wall time is the given hour,
    /// expressed in UTC the way the provider delivers it.
    fn ts(hour: u32) -> DateTime<FixedOffset> {
        Local
            .with_ymd_and_hms(2026, 8, 30, hour, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
            .fixed_offset()
    }

    fn observation(code: i64) -> CurrentObservation {
        CurrentObservation {
            temperature_c: 21.6,
            humidity_pct: 54.4,
            wind_speed_ms: 5.0,
            weather_code: code,
            timestamp: ts(14),
        }
    }

    fn hourly_sequence(len: usize) -> Vec<HourlyInterval> {
        (0..len)
            .map(|i| HourlyInterval {
                start_time: ts((14 + i as u32) % 24),
                temperature_c: 20.0 + i as f64,
                weather_code: 1000,
            })
            .collect()
    }

    #[test]
    fn test_render_current_writes_all_regions() {
        let mut presenter = Presenter::new(RecordingSurface::default());
        presenter.render_current(&observation(1101), true, "Latitude: 47.61, Longitude: -122.33");

        let surface = presenter.surface();
        assert_eq!(surface.location, "Latitude: 47.61, Longitude: -122.33");
        assert_eq!(surface.temperature, "22\u{b0}C");
        assert_eq!(surface.description, "Partly Cloudy");
        assert_eq!(surface.humidity, "54%");
        assert_eq!(surface.wind_speed, "18.0 km/h");
        assert_eq!(surface.icon, "\u{1f324}\u{fe0f}");
    }

    #[test]
    fn test_render_current_unknown_code_falls_back() {
        let mut presenter = Presenter::new(RecordingSurface::default());
        presenter.render_current(&observation(4321), false, "somewhere");

        let surface = presenter.surface();
        assert_eq!(surface.description, "Unknown");
        assert_eq!(surface.icon, "\u{1f319}");
    }

    #[test]
    fn test_render_hourly_takes_twelve_after_first() {
        let mut presenter = Presenter::new(RecordingSurface::default());
        presenter.render_hourly(&hourly_sequence(20));

        let surface = presenter.surface();
        assert_eq!(surface.hourly.len(), 12);
        // First rendered slot is index 1 of the input (21.0°C → "21°C")
        assert_eq!(surface.hourly[0].2, "21\u{b0}C");
        assert_eq!(surface.hourly[11].2, "32\u{b0}C");
    }

    #[test]
    fn test_render_hourly_short_sequence() {
        let mut presenter = Presenter::new(RecordingSurface::default());
        presenter.render_hourly(&hourly_sequence(5));
        assert_eq!(presenter.surface().hourly.len(), 4);

        presenter.render_hourly(&hourly_sequence(1));
        assert_eq!(presenter.surface().hourly.len(), 0);
    }

    #[test]
    fn test_render_hourly_clears_previous_content() {
        let mut presenter = Presenter::new(RecordingSurface::default());
        presenter.render_hourly(&hourly_sequence(20));
        presenter.render_hourly(&hourly_sequence(3));

        let surface = presenter.surface();
        assert_eq!(surface.hourly_clears, 2);
        assert_eq!(surface.hourly.len(), 2);
    }

    #[test]
    fn test_render_hourly_day_night_per_slot() {
        // Input hours: 16 (skipped), 17 day, 18 night for the hourly rule.
        let intervals: Vec<HourlyInterval> = (16..19)
            .map(|h| HourlyInterval {
                start_time: ts(h),
                temperature_c: 10.0,
                weather_code: 1000,
            })
            .collect();

        let mut presenter = Presenter::new(RecordingSurface::default());
        presenter.render_hourly(&intervals);

        let surface = presenter.surface();
        assert_eq!(surface.hourly.len(), 2);
        assert_eq!(surface.hourly[0].0, "5 PM");
        assert_eq!(surface.hourly[0].1, "\u{2600}\u{fe0f}");
        assert_eq!(surface.hourly[1].0, "6 PM");
        assert_eq!(surface.hourly[1].1, "\u{1f319}");
    }
}
