//! Segment calculation shared by all meter renderers

/// Clamp a fraction into `[0, 1]`. NaN counts as empty and `-0.0` becomes
/// `0.0`.
pub fn clamp_fraction(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0) + 0.0
    }
}

/// Map a fraction onto an index into a palette of `len` entries,
/// rounding to the nearest entry (halves round up).
pub fn map_to_index(x: f64, len: usize) -> usize {
    debug_assert!(len > 0);
    (clamp_fraction(x) * (len - 1) as f64 + 0.5) as usize
}

/// Truncating floating modulo: `x - trunc(x / y) * y`
fn fmod(x: f64, y: f64) -> f64 {
    x - (x / y).trunc() * y
}

/// How a meter of some width splits into full cells, one partial cell, and
/// empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segments {
    /// Number of completely filled cells, counted from the fill origin
    pub left_width: usize,
    /// Palette index of the boundary cell, `None` when there is none
    pub partial: Option<usize>,
    /// Number of empty cells after the boundary cell
    pub right_width: usize,
}

impl Segments {
    /// Split a meter of `width` cells drawn with a palette of `palette_len`
    /// glyphs at fill level `x`.
    pub fn calculate(x: f64, width: usize, palette_len: usize) -> Self {
        if width == 0 {
            return Segments::default();
        }
        debug_assert!(palette_len >= 2);

        let x = clamp_fraction(x);
        let left_width = (x * width as f64) as usize;

        if left_width >= width {
            return Segments {
                left_width: width,
                partial: None,
                right_width: 0,
            };
        }

        // The modulus is `palette_len - 1`, not `palette_len`: this gives the
        // preferred distribution of glyphs at both ends of the meter.
        let steps = (palette_len - 1) as f64;
        let partial = (fmod(x * width as f64 * steps, steps) + 0.5) as usize;

        Segments {
            left_width,
            partial: Some(partial),
            right_width: width - left_width - 1,
        }
    }

    /// Total number of cells covered
    pub fn width(&self) -> usize {
        self.left_width + usize::from(self.partial.is_some()) + self.right_width
    }
}
