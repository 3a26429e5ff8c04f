//! Glyph tables
//!
//! Palettes of block characters used to draw meters. Every fill palette
//! starts with the empty cell and ends with the full block; the entries in
//! between are eighths of a cell.
//!
//! Code points come from the Block Elements (U+2580) and Symbols for Legacy
//! Computing (U+1FB00) charts.

pub const SPACE: char = ' ';

// Block Elements
pub const UPPER_HALF_BLOCK: char = '\u{2580}'; // ▀
pub const LOWER_ONE_EIGHTH_BLOCK: char = '\u{2581}'; // ▁
pub const LOWER_ONE_QUARTER_BLOCK: char = '\u{2582}'; // ▂
pub const LOWER_THREE_EIGHTHS_BLOCK: char = '\u{2583}'; // ▃
pub const LOWER_HALF_BLOCK: char = '\u{2584}'; // ▄
pub const LOWER_FIVE_EIGHTHS_BLOCK: char = '\u{2585}'; // ▅
pub const LOWER_THREE_QUARTERS_BLOCK: char = '\u{2586}'; // ▆
pub const LOWER_SEVEN_EIGHTHS_BLOCK: char = '\u{2587}'; // ▇
pub const FULL_BLOCK: char = '\u{2588}'; // █
pub const LEFT_SEVEN_EIGHTHS_BLOCK: char = '\u{2589}'; // ▉
pub const LEFT_THREE_QUARTERS_BLOCK: char = '\u{258A}'; // ▊
pub const LEFT_FIVE_EIGHTHS_BLOCK: char = '\u{258B}'; // ▋
pub const LEFT_HALF_BLOCK: char = '\u{258C}'; // ▌
pub const LEFT_THREE_EIGHTHS_BLOCK: char = '\u{258D}'; // ▍
pub const LEFT_ONE_QUARTER_BLOCK: char = '\u{258E}'; // ▎
pub const LEFT_ONE_EIGHTH_BLOCK: char = '\u{258F}'; // ▏
pub const RIGHT_HALF_BLOCK: char = '\u{2590}'; // ▐
pub const UPPER_ONE_EIGHTH_BLOCK: char = '\u{2594}'; // ▔
pub const RIGHT_ONE_EIGHTH_BLOCK: char = '\u{2595}'; // ▕

// Symbols for Legacy Computing
pub const VERTICAL_ONE_EIGHTH_BLOCK_2: char = '\u{1FB70}';
pub const VERTICAL_ONE_EIGHTH_BLOCK_3: char = '\u{1FB71}';
pub const VERTICAL_ONE_EIGHTH_BLOCK_4: char = '\u{1FB72}';
pub const VERTICAL_ONE_EIGHTH_BLOCK_5: char = '\u{1FB73}';
pub const VERTICAL_ONE_EIGHTH_BLOCK_6: char = '\u{1FB74}';
pub const VERTICAL_ONE_EIGHTH_BLOCK_7: char = '\u{1FB75}';
pub const HORIZONTAL_ONE_EIGHTH_BLOCK_2: char = '\u{1FB76}';
pub const HORIZONTAL_ONE_EIGHTH_BLOCK_3: char = '\u{1FB77}';
pub const HORIZONTAL_ONE_EIGHTH_BLOCK_4: char = '\u{1FB78}';
pub const HORIZONTAL_ONE_EIGHTH_BLOCK_5: char = '\u{1FB79}';
pub const HORIZONTAL_ONE_EIGHTH_BLOCK_6: char = '\u{1FB7A}';
pub const HORIZONTAL_ONE_EIGHTH_BLOCK_7: char = '\u{1FB7B}';
pub const UPPER_ONE_QUARTER_BLOCK: char = '\u{1FB82}';
pub const UPPER_THREE_EIGHTHS_BLOCK: char = '\u{1FB83}';
pub const UPPER_FIVE_EIGHTHS_BLOCK: char = '\u{1FB84}';
pub const UPPER_THREE_QUARTERS_BLOCK: char = '\u{1FB85}';
pub const UPPER_SEVEN_EIGHTHS_BLOCK: char = '\u{1FB86}';
pub const RIGHT_ONE_QUARTER_BLOCK: char = '\u{1FB87}';
pub const RIGHT_THREE_EIGHTHS_BLOCK: char = '\u{1FB88}';
pub const RIGHT_FIVE_EIGHTHS_BLOCK: char = '\u{1FB89}';
pub const RIGHT_THREE_QUARTERS_BLOCK: char = '\u{1FB8A}';
pub const RIGHT_SEVEN_EIGHTHS_BLOCK: char = '\u{1FB8B}';

/// Blocks growing up from the bottom of the cell
pub const LOWER_BLOCKS: &[char] = &[
    SPACE,
    LOWER_ONE_EIGHTH_BLOCK,
    LOWER_ONE_QUARTER_BLOCK,
    LOWER_THREE_EIGHTHS_BLOCK,
    LOWER_HALF_BLOCK,
    LOWER_FIVE_EIGHTHS_BLOCK,
    LOWER_THREE_QUARTERS_BLOCK,
    LOWER_SEVEN_EIGHTHS_BLOCK,
    FULL_BLOCK,
];

/// Blocks growing right from the left edge of the cell
pub const LEFT_BLOCKS: &[char] = &[
    SPACE,
    LEFT_ONE_EIGHTH_BLOCK,
    LEFT_ONE_QUARTER_BLOCK,
    LEFT_THREE_EIGHTHS_BLOCK,
    LEFT_HALF_BLOCK,
    LEFT_FIVE_EIGHTHS_BLOCK,
    LEFT_THREE_QUARTERS_BLOCK,
    LEFT_SEVEN_EIGHTHS_BLOCK,
    FULL_BLOCK,
];

/// Blocks growing left from the right edge of the cell
pub const RIGHT_BLOCKS: &[char] = &[
    SPACE,
    RIGHT_ONE_EIGHTH_BLOCK,
    RIGHT_ONE_QUARTER_BLOCK,
    RIGHT_THREE_EIGHTHS_BLOCK,
    RIGHT_HALF_BLOCK,
    RIGHT_FIVE_EIGHTHS_BLOCK,
    RIGHT_THREE_QUARTERS_BLOCK,
    RIGHT_SEVEN_EIGHTHS_BLOCK,
    FULL_BLOCK,
];

/// Blocks growing down from the top of the cell
pub const UPPER_BLOCKS: &[char] = &[
    SPACE,
    UPPER_ONE_EIGHTH_BLOCK,
    UPPER_ONE_QUARTER_BLOCK,
    UPPER_THREE_EIGHTHS_BLOCK,
    UPPER_HALF_BLOCK,
    UPPER_FIVE_EIGHTHS_BLOCK,
    UPPER_THREE_QUARTERS_BLOCK,
    UPPER_SEVEN_EIGHTHS_BLOCK,
    FULL_BLOCK,
];

/// A one-eighth wide vertical line, from the left edge of the cell to the right
pub const VERTICAL_LINES: &[char] = &[
    LEFT_ONE_EIGHTH_BLOCK,
    VERTICAL_ONE_EIGHTH_BLOCK_2,
    VERTICAL_ONE_EIGHTH_BLOCK_3,
    VERTICAL_ONE_EIGHTH_BLOCK_4,
    VERTICAL_ONE_EIGHTH_BLOCK_5,
    VERTICAL_ONE_EIGHTH_BLOCK_6,
    VERTICAL_ONE_EIGHTH_BLOCK_7,
    RIGHT_ONE_EIGHTH_BLOCK,
];

/// A one-eighth high horizontal line, from the bottom of the cell to the top
pub const HORIZONTAL_LINES: &[char] = &[
    LOWER_ONE_EIGHTH_BLOCK,
    HORIZONTAL_ONE_EIGHTH_BLOCK_7,
    HORIZONTAL_ONE_EIGHTH_BLOCK_6,
    HORIZONTAL_ONE_EIGHTH_BLOCK_5,
    HORIZONTAL_ONE_EIGHTH_BLOCK_4,
    HORIZONTAL_ONE_EIGHTH_BLOCK_3,
    HORIZONTAL_ONE_EIGHTH_BLOCK_2,
    UPPER_ONE_EIGHTH_BLOCK,
];

/// Palettes usable with [`select_glyph`](super::select_glyph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphPalette {
    #[default]
    Lower,
    Upper,
    HorizontalLine,
}

impl GlyphPalette {
    pub fn glyphs(self) -> &'static [char] {
        match self {
            GlyphPalette::Lower => LOWER_BLOCKS,
            GlyphPalette::Upper => UPPER_BLOCKS,
            GlyphPalette::HorizontalLine => HORIZONTAL_LINES,
        }
    }

    /// The glyph a fresh history strip is filled with
    pub fn blank(self) -> char {
        SPACE
    }
}
