//! statline - a status-line generator with sub-character Unicode meters
//!
//! The library holds the meter renderers and components; the `statline`
//! binary drives them from stdin.

pub mod core;
pub mod meters;
pub mod ui;
