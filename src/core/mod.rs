//! Core module containing the main data structures
//!
//! This module contains:
//! - Sample: one tick of metric readings parsed from the input
//! - Settings: user configuration and component list
//! - Units: human-readable quantities

mod sample;
mod settings;
mod units;

pub use sample::*;
pub use settings::*;
pub use units::*;
