//! Fraction Meter
//!
//! Draws one sample key as a gauge, a history graph or a number.

use super::{
    clamp_fraction, FillDirection, HistoryStrip, Meter, MeterMode, MeterStyle, ModeFlags,
};
use crate::core::{Reading, Sample, Settings};

/// Fraction Meter - bound to the sample key it is named after
#[derive(Debug)]
pub struct FractionMeter {
    key: String,
    mode: MeterMode,
    reading: Option<Reading>,
    history_width: usize,
    history: Option<HistoryStrip>,
}

impl FractionMeter {
    pub fn new(key: &str, history_width: usize) -> Self {
        FractionMeter {
            key: key.to_string(),
            mode: MeterMode::Bar,
            reading: None,
            history_width,
            history: None,
        }
    }

    /// The last reading, if it was available
    pub fn reading(&self) -> Option<Reading> {
        self.reading
    }

    pub fn history(&self) -> Option<&HistoryStrip> {
        self.history.as_ref()
    }

    /// Style for the gauge modes, after falling back to ASCII when unicode is
    /// not allowed. Graph modes only get a style in the ASCII case.
    fn gauge_style(&self, settings: &Settings) -> Option<MeterStyle> {
        let ascii = |direction| MeterStyle::Ascii {
            direction,
            fill: settings.ascii_fill,
            unfill: settings.ascii_unfill,
        };

        match self.mode {
            MeterMode::Ascii => Some(ascii(FillDirection::Left)),
            MeterMode::AsciiRight => Some(ascii(FillDirection::Right)),
            MeterMode::BarRight if !settings.allow_unicode => Some(ascii(FillDirection::Right)),
            MeterMode::Bar
            | MeterMode::Line
            | MeterMode::Graph
            | MeterMode::GraphUpper
            | MeterMode::GraphLine
                if !settings.allow_unicode =>
            {
                Some(ascii(FillDirection::Left))
            }
            MeterMode::Bar => Some(MeterStyle::Blocks(FillDirection::Left)),
            MeterMode::BarRight => Some(MeterStyle::Blocks(FillDirection::Right)),
            MeterMode::Line => Some(MeterStyle::VerticalLine),
            _ => None,
        }
    }

    fn render_percent(x: f64, settings: &Settings) -> String {
        let mut percent = 100.0 * clamp_fraction(x);
        if settings.max_percent_99 {
            percent = percent.min(99.0);
        }
        format!("{:.0}", percent)
    }
}

impl Meter for FractionMeter {
    fn name(&self) -> &str {
        &self.key
    }

    fn supported_modes(&self) -> ModeFlags {
        ModeFlags::GAUGES | ModeFlags::GRAPHS | ModeFlags::PERCENT | ModeFlags::AMOUNTS
    }

    fn update(&mut self, sample: &Sample) {
        self.reading = sample.get(&self.key);

        if let Some(history) = &mut self.history {
            match self.reading {
                Some(reading) => history.record(reading.fraction),
                None => history.touch(),
            }
        }
    }

    fn render(&self, settings: &Settings) -> Option<String> {
        let reading = self.reading?;
        let x = reading.fraction;

        match self.mode {
            MeterMode::Percent => Some(Self::render_percent(x, settings)),
            MeterMode::Value | MeterMode::Free | MeterMode::Total => {
                let amount = match self.mode {
                    MeterMode::Free => reading.free(),
                    MeterMode::Total => reading.total,
                    _ => reading.used,
                };
                amount.map(|amount| settings.human_format.format(amount, settings.human_base))
            }
            MeterMode::Text => None,
            mode => match (self.gauge_style(settings), &self.history) {
                (Some(style), _) => {
                    let width = if mode.graph_palette().is_some() {
                        self.history_width
                    } else {
                        settings.meter_width
                    };
                    Some(style.render(x, width))
                }
                (None, Some(history)) => Some(history.render()),
                (None, None) => None,
            },
        }
    }

    fn mode(&self) -> MeterMode {
        self.mode
    }

    fn set_mode(&mut self, mode: MeterMode) {
        self.mode = mode;

        let palette = mode.graph_palette();
        let current = self.history.as_ref().map(HistoryStrip::palette);
        if palette != current {
            self.history = palette.map(|palette| HistoryStrip::new(self.history_width, palette));
        }
    }
}
