//! Meter renderers
//!
//! Every gauge is drawn by [`MeterStyle::render_into`], which writes exactly
//! one glyph per cell of a caller-owned buffer. The free functions are
//! shorthands returning a `String`.

use std::iter::{once, repeat_n};

use super::glyphs::{
    GlyphPalette, FULL_BLOCK, LEFT_BLOCKS, RIGHT_BLOCKS, RIGHT_ONE_EIGHTH_BLOCK, SPACE,
    VERTICAL_LINES,
};
use super::segments::{clamp_fraction, map_to_index, Segments};

/// Edge a meter fills from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillDirection {
    #[default]
    Left,
    Right,
}

/// How a fraction is turned into a row of glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterStyle {
    /// Eighth-resolution block fill
    Blocks(FillDirection),
    /// A single one-eighth wide vertical line whose position follows the fraction
    VerticalLine,
    /// Whole-cell fill with two plain characters
    Ascii {
        direction: FillDirection,
        fill: char,
        unfill: char,
    },
}

impl MeterStyle {
    /// Draw `x` into `meter`. The meter width is the buffer length; every cell
    /// is overwritten.
    pub fn render_into(&self, x: f64, meter: &mut [char]) {
        if meter.is_empty() {
            return;
        }

        match *self {
            MeterStyle::Blocks(direction) => blocks_meter(x, meter, direction),
            MeterStyle::VerticalLine => vertical_line_meter(x, meter),
            MeterStyle::Ascii {
                direction,
                fill,
                unfill,
            } => char_meter(x, meter, direction, fill, unfill),
        }
    }

    /// Draw `x` into a new string of `width` glyphs
    pub fn render(&self, x: f64, width: usize) -> String {
        let mut meter = vec![SPACE; width];
        self.render_into(x, &mut meter);
        meter.into_iter().collect()
    }
}

/// Copy `glyphs` into `meter`, which must receive exactly one glyph per cell.
fn write_cells(meter: &mut [char], glyphs: impl Iterator<Item = char>) {
    let mut written = 0;
    for (cell, glyph) in meter.iter_mut().zip(glyphs) {
        *cell = glyph;
        written += 1;
    }
    debug_assert_eq!(written, meter.len());
}

fn blocks_meter(x: f64, meter: &mut [char], direction: FillDirection) {
    let palette = match direction {
        FillDirection::Left => LEFT_BLOCKS,
        FillDirection::Right => RIGHT_BLOCKS,
    };
    let Segments {
        left_width,
        partial,
        right_width,
    } = Segments::calculate(x, meter.len(), palette.len());

    let full = repeat_n(FULL_BLOCK, left_width);
    let partial = partial.map(|i| palette[i]).into_iter();
    let empty = repeat_n(SPACE, right_width);

    match direction {
        FillDirection::Left => write_cells(meter, full.chain(partial).chain(empty)),
        // The filled run starts at the right edge, so the two runs swap sides.
        FillDirection::Right => write_cells(meter, empty.chain(partial).chain(full)),
    }
}

fn vertical_line_meter(x: f64, meter: &mut [char]) {
    let width = meter.len();
    let Segments {
        left_width,
        partial,
        right_width,
    } = Segments::calculate(x, width, VERTICAL_LINES.len());

    if left_width == width {
        // Pin the line to the rightmost column
        write_cells(
            meter,
            repeat_n(SPACE, width - 1).chain(once(RIGHT_ONE_EIGHTH_BLOCK)),
        );
    } else {
        let line = partial.map(|i| VERTICAL_LINES[i]).into_iter();
        write_cells(
            meter,
            repeat_n(SPACE, left_width)
                .chain(line)
                .chain(repeat_n(SPACE, right_width)),
        );
    }
}

fn char_meter(x: f64, meter: &mut [char], direction: FillDirection, fill: char, unfill: char) {
    let width = meter.len();
    let filled = ((clamp_fraction(x) * width as f64 + 0.5) as usize).min(width);
    let unfilled = width - filled;

    match direction {
        FillDirection::Left => write_cells(
            meter,
            repeat_n(fill, filled).chain(repeat_n(unfill, unfilled)),
        ),
        FillDirection::Right => write_cells(
            meter,
            repeat_n(unfill, unfilled).chain(repeat_n(fill, filled)),
        ),
    }
}

/// Block meter filled from `direction`
pub fn render_fill(x: f64, width: usize, direction: FillDirection) -> String {
    MeterStyle::Blocks(direction).render(x, width)
}

/// Vertical line meter
pub fn render_line(x: f64, width: usize) -> String {
    MeterStyle::VerticalLine.render(x, width)
}

/// ASCII meter with no sub-cell resolution
pub fn render_ascii_fill(
    x: f64,
    width: usize,
    fill: char,
    unfill: char,
    direction: FillDirection,
) -> String {
    MeterStyle::Ascii {
        direction,
        fill,
        unfill,
    }
    .render(x, width)
}

/// A single glyph from `palette` whose size follows `x`
pub fn select_glyph(x: f64, palette: GlyphPalette) -> char {
    let glyphs = palette.glyphs();
    glyphs[map_to_index(x, glyphs.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meters::glyphs::*;

    fn full(n: usize) -> String {
        FULL_BLOCK.to_string().repeat(n)
    }

    fn spaces(n: usize) -> String {
        " ".repeat(n)
    }

    /// Fill level of a left-block meter, in eighths of a cell
    fn eighths(meter: &str) -> usize {
        meter
            .chars()
            .map(|c| LEFT_BLOCKS.iter().position(|&g| g == c).unwrap())
            .sum()
    }

    // ==================== render_fill Tests ====================

    #[test]
    fn test_render_fill_empty() {
        assert_eq!(render_fill(0.0, 10, FillDirection::Left), spaces(10));
    }

    #[test]
    fn test_render_fill_full() {
        assert_eq!(render_fill(1.0, 10, FillDirection::Left), full(10));
    }

    #[test]
    fn test_render_fill_half() {
        // 0.5 * 10 * 8 is a whole number of eighths, so the boundary cell is blank
        let expected = format!("{}{}{}", full(5), SPACE, spaces(4));
        assert_eq!(render_fill(0.5, 10, FillDirection::Left), expected);
    }

    #[test]
    fn test_render_fill_partial_glyph() {
        let expected = format!("{}{}{}", full(5), LEFT_ONE_QUARTER_BLOCK, spaces(4));
        assert_eq!(render_fill(0.52, 10, FillDirection::Left), expected);

        let expected = format!("{}{}{}", full(5), LEFT_HALF_BLOCK, spaces(4));
        assert_eq!(render_fill(0.55, 10, FillDirection::Left), expected);
    }

    #[test]
    fn test_render_fill_right() {
        assert_eq!(render_fill(0.0, 10, FillDirection::Right), spaces(10));
        assert_eq!(render_fill(1.0, 10, FillDirection::Right), full(10));

        let expected = format!("{}{}{}", spaces(4), RIGHT_ONE_QUARTER_BLOCK, full(5));
        assert_eq!(render_fill(0.52, 10, FillDirection::Right), expected);
    }

    #[test]
    fn test_render_fill_clamps() {
        for x in [-0.1, -1e9, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(
                render_fill(x, 10, FillDirection::Left),
                render_fill(0.0, 10, FillDirection::Left)
            );
        }
        for x in [1.01, 1e9, f64::INFINITY] {
            assert_eq!(
                render_fill(x, 10, FillDirection::Left),
                render_fill(1.0, 10, FillDirection::Left)
            );
            assert_eq!(
                render_fill(x, 10, FillDirection::Right),
                render_fill(1.0, 10, FillDirection::Right)
            );
        }
    }

    #[test]
    fn test_render_fill_is_monotonic() {
        for width in [1usize, 3, 10, 17] {
            let mut last = 0;
            for i in 0..=2000 {
                let x = i as f64 / 2000.0;
                let level = eighths(&render_fill(x, width, FillDirection::Left));
                assert!(level >= last, "x={} width={}", x, width);
                last = level;
            }
            assert_eq!(last, width * 8);
        }
    }

    #[test]
    fn test_render_fill_width_matches() {
        for width in 0..20 {
            assert_eq!(
                render_fill(0.37, width, FillDirection::Left).chars().count(),
                width
            );
            assert_eq!(
                render_fill(0.37, width, FillDirection::Right).chars().count(),
                width
            );
        }
    }

    // ==================== render_line Tests ====================

    #[test]
    fn test_render_line_clamps() {
        for x in [-0.1, -1e9, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(render_line(x, 8), render_line(0.0, 8));
        }
        for x in [1.01, 1e9, f64::INFINITY] {
            assert_eq!(render_line(x, 8), render_line(1.0, 8));
        }
    }

    #[test]
    fn test_render_line_at_left_edge() {
        let expected = format!("{}{}", LEFT_ONE_EIGHTH_BLOCK, spaces(7));
        assert_eq!(render_line(0.0, 8), expected);
    }

    #[test]
    fn test_render_line_at_right_edge() {
        let expected = format!("{}{}", spaces(7), RIGHT_ONE_EIGHTH_BLOCK);
        assert_eq!(render_line(1.0, 8), expected);
        assert_eq!(render_line(5.0, 8), expected);
    }

    #[test]
    fn test_render_line_middle() {
        // 0.5 * 8 cells = 4 cells in; 4 * 7 mod 7 = 0 -> leftmost line glyph
        let expected = format!("{}{}{}", spaces(4), LEFT_ONE_EIGHTH_BLOCK, spaces(3));
        assert_eq!(render_line(0.5, 8), expected);
    }

    #[test]
    fn test_render_line_single_cell() {
        assert_eq!(render_line(1.0, 1), RIGHT_ONE_EIGHTH_BLOCK.to_string());
        assert_eq!(render_line(0.0, 1), LEFT_ONE_EIGHTH_BLOCK.to_string());
    }

    #[test]
    fn test_render_line_has_one_line_glyph() {
        for i in 0..=100 {
            let x = i as f64 / 100.0;
            let meter = render_line(x, 10);
            assert_eq!(meter.chars().count(), 10);
            assert_eq!(meter.chars().filter(|c| *c != SPACE).count(), 1);
        }
    }

    // ==================== render_ascii_fill Tests ====================

    #[test]
    fn test_render_ascii_fill_half() {
        assert_eq!(
            render_ascii_fill(0.5, 10, '=', ' ', FillDirection::Left),
            "=====     "
        );
        assert_eq!(
            render_ascii_fill(0.5, 10, '=', ' ', FillDirection::Right),
            "     ====="
        );
    }

    #[test]
    fn test_render_ascii_fill_rounds_half_up() {
        // 0.25 * 10 = 2.5 -> 3
        assert_eq!(
            render_ascii_fill(0.25, 10, '#', '.', FillDirection::Left),
            "###......."
        );
        assert_eq!(
            render_ascii_fill(0.24, 10, '#', '.', FillDirection::Left),
            "##........"
        );
    }

    #[test]
    fn test_render_ascii_fill_ends() {
        assert_eq!(
            render_ascii_fill(-1.0, 4, '#', '.', FillDirection::Left),
            "...."
        );
        assert_eq!(
            render_ascii_fill(2.0, 4, '#', '.', FillDirection::Right),
            "####"
        );
    }

    // ==================== select_glyph Tests ====================

    #[test]
    fn test_select_glyph_lower() {
        assert_eq!(select_glyph(0.0, GlyphPalette::Lower), SPACE);
        assert_eq!(select_glyph(0.5, GlyphPalette::Lower), LOWER_HALF_BLOCK);
        assert_eq!(select_glyph(1.0, GlyphPalette::Lower), FULL_BLOCK);
    }

    #[test]
    fn test_select_glyph_upper() {
        assert_eq!(select_glyph(0.0, GlyphPalette::Upper), SPACE);
        assert_eq!(select_glyph(0.5, GlyphPalette::Upper), UPPER_HALF_BLOCK);
        assert_eq!(select_glyph(1.0, GlyphPalette::Upper), FULL_BLOCK);
    }

    #[test]
    fn test_select_glyph_horizontal_line() {
        assert_eq!(
            select_glyph(0.0, GlyphPalette::HorizontalLine),
            LOWER_ONE_EIGHTH_BLOCK
        );
        assert_eq!(
            select_glyph(1.0, GlyphPalette::HorizontalLine),
            UPPER_ONE_EIGHTH_BLOCK
        );
    }

    // ==================== Common Tests ====================

    #[test]
    fn test_zero_width_renders_nothing() {
        assert_eq!(render_fill(0.5, 0, FillDirection::Left), "");
        assert_eq!(render_fill(0.5, 0, FillDirection::Right), "");
        assert_eq!(render_line(0.5, 0), "");
        assert_eq!(render_ascii_fill(0.5, 0, '=', ' ', FillDirection::Left), "");

        let mut meter: [char; 0] = [];
        MeterStyle::VerticalLine.render_into(0.5, &mut meter);
    }

    #[test]
    fn test_render_into_overwrites_every_cell() {
        let mut meter = ['x'; 6];
        MeterStyle::Blocks(FillDirection::Left).render_into(0.0, &mut meter);
        assert_eq!(meter, [SPACE; 6]);
    }

    #[test]
    fn test_renderers_are_idempotent() {
        let styles = [
            MeterStyle::Blocks(FillDirection::Left),
            MeterStyle::Blocks(FillDirection::Right),
            MeterStyle::VerticalLine,
            MeterStyle::Ascii {
                direction: FillDirection::Left,
                fill: '=',
                unfill: '-',
            },
        ];
        for style in styles {
            for i in 0..=50 {
                let x = i as f64 / 50.0;
                assert_eq!(style.render(x, 9), style.render(x, 9));
            }
        }
    }
}
