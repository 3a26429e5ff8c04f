//! Text Meter (literal text/separator)

use super::{Meter, MeterMode, ModeFlags};
use crate::core::{Sample, Settings};

/// Text Meter - always renders the same string
#[derive(Debug)]
pub struct TextMeter {
    mode: MeterMode,
    text: String,
}

impl Default for TextMeter {
    fn default() -> Self {
        TextMeter::new("")
    }
}

impl TextMeter {
    pub fn new(text: &str) -> Self {
        TextMeter {
            mode: MeterMode::Text,
            text: text.to_string(),
        }
    }
}

impl Meter for TextMeter {
    fn name(&self) -> &str {
        "text"
    }

    fn supported_modes(&self) -> ModeFlags {
        ModeFlags::TEXT
    }

    fn default_mode(&self) -> MeterMode {
        MeterMode::Text
    }

    fn update(&mut self, _sample: &Sample) {
        // Nothing to update
    }

    fn render(&self, _settings: &Settings) -> Option<String> {
        Some(self.text.clone())
    }

    fn mode(&self) -> MeterMode {
        self.mode
    }

    fn set_mode(&mut self, mode: MeterMode) {
        self.mode = mode;
    }
}
