//! UI module
//!
//! This module contains the output side of statline:
//! - StatusLine: the ordered components composed into one line per tick

mod status_line;

pub use status_line::*;
