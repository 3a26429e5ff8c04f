//! History strip
//!
//! A scrolling row of one-glyph samples, oldest on the left. Each recorded
//! sample shifts the row left by one cell and appends a glyph chosen with
//! [`select_glyph`].

use std::collections::VecDeque;

use super::glyphs::GlyphPalette;
use super::render::select_glyph;

/// Scrolling one-glyph-per-sample history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStrip {
    palette: GlyphPalette,
    state: State,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    /// No sample has been seen yet
    Uninitialized { width: usize },
    /// The row of cells, always exactly `width` long
    Recording { cells: VecDeque<char> },
}

impl HistoryStrip {
    pub fn new(width: usize, palette: GlyphPalette) -> Self {
        HistoryStrip {
            palette,
            state: State::Uninitialized { width },
        }
    }

    pub fn width(&self) -> usize {
        match &self.state {
            State::Uninitialized { width } => *width,
            State::Recording { cells } => cells.len(),
        }
    }

    pub fn palette(&self) -> GlyphPalette {
        self.palette
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, State::Recording { .. })
    }

    /// Make sure the strip holds a row of blank cells, without recording
    /// anything.
    pub fn touch(&mut self) {
        self.cells_mut();
    }

    fn cells_mut(&mut self) -> &mut VecDeque<char> {
        if let State::Uninitialized { width } = self.state {
            let blank = self.palette.blank();
            self.state = State::Recording {
                cells: std::iter::repeat_n(blank, width).collect(),
            };
        }

        match &mut self.state {
            State::Recording { cells } => cells,
            State::Uninitialized { .. } => unreachable!("history strip was just initialized"),
        }
    }

    /// Shift the strip left by one cell and append the glyph for `x`.
    pub fn record(&mut self, x: f64) {
        let glyph = select_glyph(x, self.palette);
        let cells = self.cells_mut();
        if cells.is_empty() {
            return;
        }
        cells.pop_front();
        cells.push_back(glyph);
    }

    /// The strip as a string, `width` glyphs long. An uninitialized strip
    /// renders as blanks.
    pub fn render(&self) -> String {
        match &self.state {
            State::Uninitialized { width } => {
                std::iter::repeat_n(self.palette.blank(), *width).collect()
            }
            State::Recording { cells } => cells.iter().collect(),
        }
    }

    /// Most recently recorded glyph
    pub fn latest(&self) -> Option<char> {
        match &self.state {
            State::Uninitialized { .. } => None,
            State::Recording { cells } => cells.back().copied(),
        }
    }
}
