//! Terminal implementation of the render surface.
//!
//! Buffers every sink write and draws the whole panel at once, so a
//! half-finished fetch never leaves a torn display.

use crate::render::RenderSurface;

#[derive(Debug, Default)]
pub struct TerminalSurface {
    location: String,
    temperature: String,
    description: String,
    icon: String,
    humidity: String,
    wind_speed: String,
    hourly: Vec<(String, String, String)>,
    error: String,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the buffered panel to stdout.
    pub fn draw(&self) {
        println!("{}", self.location);

        if !self.temperature.is_empty() {
            println!();
            println!("  {}  {}  {}", self.icon, self.temperature, self.description);
            println!("  Humidity: {}   Wind: {}", self.humidity, self.wind_speed);
        }

        if !self.hourly.is_empty() {
            println!();
            println!("  Next hours:");
            for (time, glyph, temperature) in &self.hourly {
                println!("    {:>5}  {}  {}", time, glyph, temperature);
            }
        }

        if !self.error.is_empty() {
            println!();
            println!("  {}", self.error);
        }
    }
}

impl RenderSurface for TerminalSurface {
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
    }

    fn push_hourly(&mut self, time: &str, glyph: &str, temperature: &str) {
        self.hourly
            .push((time.to_string(), glyph.to_string(), temperature.to_string()));
    }

    fn set_error(&mut self, text: &str) {
        self.error = text.to_string();
    }
}
