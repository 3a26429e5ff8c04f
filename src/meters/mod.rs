//! Meters module
//!
//! This module contains the glyph renderers and the meter components that
//! turn one metric reading into a piece of the status line.

mod datetime_meter;
mod fraction_meter;
mod glyphs;
mod history;
mod render;
mod segments;
mod text_meter;

use bitflags::bitflags;

use crate::core::{ComponentConfig, Sample, Settings};

pub use datetime_meter::*;
pub use fraction_meter::*;
pub use glyphs::*;
pub use history::*;
pub use render::*;
pub use segments::*;
pub use text_meter::*;

/// Meter display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeterMode {
    /// Block meter filling from the left
    #[default]
    Bar,
    /// Block meter filling from the right
    BarRight,
    /// Vertical line meter
    Line,
    /// ASCII meter filling from the left
    Ascii,
    /// ASCII meter filling from the right
    AsciiRight,
    /// History of lower blocks
    Graph,
    /// History of upper blocks
    GraphUpper,
    /// History of horizontal lines
    GraphLine,
    /// Percentage number
    Percent,
    /// Human-readable amount in use
    Value,
    /// Human-readable amount left over
    Free,
    /// Human-readable capacity
    Total,
    /// Plain text
    Text,
}

bitflags! {
    /// A set of [`MeterMode`]s
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ModeFlags: u32 {
        const BAR = 1 << 0;
        const BAR_RIGHT = 1 << 1;
        const LINE = 1 << 2;
        const ASCII = 1 << 3;
        const ASCII_RIGHT = 1 << 4;
        const GRAPH = 1 << 5;
        const GRAPH_UPPER = 1 << 6;
        const GRAPH_LINE = 1 << 7;
        const PERCENT = 1 << 8;
        const VALUE = 1 << 9;
        const TEXT = 1 << 10;
        const FREE = 1 << 11;
        const TOTAL = 1 << 12;

        const GAUGES = Self::BAR.bits()
            | Self::BAR_RIGHT.bits()
            | Self::LINE.bits()
            | Self::ASCII.bits()
            | Self::ASCII_RIGHT.bits();
        const GRAPHS = Self::GRAPH.bits() | Self::GRAPH_UPPER.bits() | Self::GRAPH_LINE.bits();
        const AMOUNTS = Self::VALUE.bits() | Self::FREE.bits() | Self::TOTAL.bits();
    }
}

impl MeterMode {
    /// Get all meter modes
    pub fn all() -> &'static [MeterMode] {
        &[
            MeterMode::Bar,
            MeterMode::BarRight,
            MeterMode::Line,
            MeterMode::Ascii,
            MeterMode::AsciiRight,
            MeterMode::Graph,
            MeterMode::GraphUpper,
            MeterMode::GraphLine,
            MeterMode::Percent,
            MeterMode::Value,
            MeterMode::Free,
            MeterMode::Total,
            MeterMode::Text,
        ]
    }

    /// Get name for settings file
    pub fn name(self) -> &'static str {
        match self {
            MeterMode::Bar => "bar",
            MeterMode::BarRight => "bar-right",
            MeterMode::Line => "line",
            MeterMode::Ascii => "ascii",
            MeterMode::AsciiRight => "ascii-right",
            MeterMode::Graph => "graph",
            MeterMode::GraphUpper => "graph-upper",
            MeterMode::GraphLine => "graph-line",
            MeterMode::Percent => "percent",
            MeterMode::Value => "value",
            MeterMode::Free => "free",
            MeterMode::Total => "total",
            MeterMode::Text => "text",
        }
    }

    /// Parse from settings file name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|mode| mode.name() == name)
    }

    pub fn flag(self) -> ModeFlags {
        match self {
            MeterMode::Bar => ModeFlags::BAR,
            MeterMode::BarRight => ModeFlags::BAR_RIGHT,
            MeterMode::Line => ModeFlags::LINE,
            MeterMode::Ascii => ModeFlags::ASCII,
            MeterMode::AsciiRight => ModeFlags::ASCII_RIGHT,
            MeterMode::Graph => ModeFlags::GRAPH,
            MeterMode::GraphUpper => ModeFlags::GRAPH_UPPER,
            MeterMode::GraphLine => ModeFlags::GRAPH_LINE,
            MeterMode::Percent => ModeFlags::PERCENT,
            MeterMode::Value => ModeFlags::VALUE,
            MeterMode::Free => ModeFlags::FREE,
            MeterMode::Total => ModeFlags::TOTAL,
            MeterMode::Text => ModeFlags::TEXT,
        }
    }

    /// Palette of the history strip behind a graph mode
    pub fn graph_palette(self) -> Option<GlyphPalette> {
        match self {
            MeterMode::Graph => Some(GlyphPalette::Lower),
            MeterMode::GraphUpper => Some(GlyphPalette::Upper),
            MeterMode::GraphLine => Some(GlyphPalette::HorizontalLine),
            _ => None,
        }
    }
}

/// Meter trait - all meters implement this
pub trait Meter: std::fmt::Debug + Send {
    /// Get the meter name
    fn name(&self) -> &str;

    /// Modes this meter can be drawn in
    fn supported_modes(&self) -> ModeFlags {
        ModeFlags::all()
    }

    /// Mode used when none (or an unsupported one) is configured
    fn default_mode(&self) -> MeterMode {
        MeterMode::Bar
    }

    /// Update meter values from this tick's sample
    fn update(&mut self, sample: &Sample);

    /// Render the meter, or `None` when its value is unavailable
    fn render(&self, settings: &Settings) -> Option<String>;

    /// Get the display mode
    fn mode(&self) -> MeterMode;

    /// Set the display mode
    fn set_mode(&mut self, mode: MeterMode);
}

/// Meter type enum for creating meters by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterType {
    DateTime,
    Text,
    Fraction,
}

impl MeterType {
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "datetime" => MeterType::DateTime,
            "text" => MeterType::Text,
            _ => MeterType::Fraction,
        }
    }

    /// Create a meter by name
    pub fn create_from_name(name: &str, param: Option<&str>, settings: &Settings) -> Box<dyn Meter> {
        match Self::from_kind(name) {
            MeterType::DateTime => Box::new(DateTimeMeter::new(param)),
            MeterType::Text => Box::new(TextMeter::new(param.unwrap_or_default())),
            MeterType::Fraction => Box::new(FractionMeter::new(name, settings.history_width)),
        }
    }

    /// Create a meter from a component entry, falling back to the meter's
    /// default mode when the configured one is not supported.
    pub fn create_from_config(config: &ComponentConfig, settings: &Settings) -> Box<dyn Meter> {
        let mut meter = Self::create_from_name(&config.kind, config.param.as_deref(), settings);

        let mode = if meter.supported_modes().contains(config.mode.flag()) {
            config.mode
        } else {
            let fallback = meter.default_mode();
            log::warn!(
                "meter {:?} does not support mode {}, using {}",
                meter.name(),
                config.mode.name(),
                fallback.name()
            );
            fallback
        };
        meter.set_mode(mode);

        meter
    }
}
