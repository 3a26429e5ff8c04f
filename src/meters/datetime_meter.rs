//! DateTime Meter
//!
//! Displays the local date and time with a strftime-style format.

use std::fmt::Write;

use chrono::Local;

use super::{Meter, MeterMode, ModeFlags};
use crate::core::{Sample, Settings};

/// DateTime Meter - displays the current date and time
#[derive(Debug)]
pub struct DateTimeMeter {
    mode: MeterMode,
    format: String,
    datetime_str: Option<String>,
}

impl Default for DateTimeMeter {
    fn default() -> Self {
        DateTimeMeter::new(None)
    }
}

impl DateTimeMeter {
    pub const DEFAULT_FORMAT: &'static str = "%a %b %d %R";

    pub fn new(format: Option<&str>) -> Self {
        DateTimeMeter {
            mode: MeterMode::Text,
            format: format.unwrap_or(Self::DEFAULT_FORMAT).to_string(),
            datetime_str: None,
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Format `time`, or `None` if the format string is invalid
    fn format_time<Tz>(&self, time: &chrono::DateTime<Tz>) -> Option<String>
    where
        Tz: chrono::TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let mut out = String::new();
        match write!(out, "{}", time.format(&self.format)) {
            Ok(()) => Some(out),
            Err(_) => {
                log::warn!("invalid datetime format {:?}", self.format);
                None
            }
        }
    }
}

impl Meter for DateTimeMeter {
    fn name(&self) -> &str {
        "datetime"
    }

    fn supported_modes(&self) -> ModeFlags {
        // Text only, no gauges or graphs
        ModeFlags::TEXT
    }

    fn default_mode(&self) -> MeterMode {
        MeterMode::Text
    }

    fn update(&mut self, _sample: &Sample) {
        let now = Local::now();
        self.datetime_str = self.format_time(&now);
    }

    fn render(&self, _settings: &Settings) -> Option<String> {
        self.datetime_str.clone()
    }

    fn mode(&self) -> MeterMode {
        self.mode
    }

    fn set_mode(&mut self, mode: MeterMode) {
        self.mode = mode;
    }
}
