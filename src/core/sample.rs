//! Sample - one tick of metric readings
//!
//! Readings come from an external producer as a line of whitespace separated
//! `key=value` tokens:
//!
//! ```text
//! cpu=0.42 mem=3120/7986 bat=87% swap=?
//! ```

use std::collections::HashMap;
use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

/// A single metric reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// How full the metric is, not yet clamped
    pub fraction: f64,
    /// Absolute amount in use, when the producer reported `used/total`
    pub used: Option<f64>,
    /// Absolute capacity, when the producer reported `used/total`
    pub total: Option<f64>,
}

impl Reading {
    pub fn fraction(fraction: f64) -> Self {
        Reading {
            fraction,
            used: None,
            total: None,
        }
    }

    pub fn ratio(used: f64, total: f64) -> Option<Self> {
        if total == 0.0 || !total.is_finite() {
            return None;
        }
        Some(Reading {
            fraction: used / total,
            used: Some(used),
            total: Some(total),
        })
    }

    /// Capacity left over, when both amounts are known
    pub fn free(&self) -> Option<f64> {
        Some(self.total? - self.used?)
    }
}

/// Errors from parsing a sample line
#[derive(Debug, Error, PartialEq)]
pub enum SampleParseError {
    #[error("expected key=value, got {token:?}")]
    MissingSeparator { token: String },
    #[error("empty key in {token:?}")]
    EmptyKey { token: String },
    #[error("invalid value for {key}: {source}")]
    InvalidNumber {
        key: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Readings for one tick, keyed by metric name.
///
/// A key mapped to `None` was reported as unavailable; a missing key was not
/// reported at all. Both render as unknown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    readings: HashMap<String, Option<Reading>>,
}

impl Sample {
    pub fn new() -> Self {
        Sample::default()
    }

    /// Record a reading (or `None` for unavailable)
    pub fn insert(&mut self, key: impl Into<String>, reading: Option<Reading>) {
        self.readings.insert(key.into(), reading);
    }

    /// Get the reading for `key`, if it is available
    pub fn get(&self, key: &str) -> Option<Reading> {
        self.readings.get(key).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    fn parse_value(key: &str, value: &str) -> Result<Option<Reading>, SampleParseError> {
        let number = |s: &str| {
            s.trim()
                .parse::<f64>()
                .map_err(|source| SampleParseError::InvalidNumber {
                    key: key.to_string(),
                    source,
                })
        };

        if value == "?" || value.eq_ignore_ascii_case("n/a") {
            return Ok(None);
        }

        if let Some(percent) = value.strip_suffix('%') {
            return number(percent).map(|p| Some(Reading::fraction(p / 100.0)));
        }

        if let Some((used, total)) = value.split_once('/') {
            let used = number(used)?;
            let total = number(total)?;
            return Ok(Reading::ratio(used, total));
        }

        number(value).map(|f| Some(Reading::fraction(f)))
    }
}

impl FromStr for Sample {
    type Err = SampleParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut sample = Sample::new();

        for token in line.split_whitespace() {
            let (key, value) =
                token
                    .split_once('=')
                    .ok_or_else(|| SampleParseError::MissingSeparator {
                        token: token.to_string(),
                    })?;

            if key.is_empty() {
                return Err(SampleParseError::EmptyKey {
                    token: token.to_string(),
                });
            }

            let reading = Self::parse_value(key, value)?;
            sample.insert(key, reading);
        }

        Ok(sample)
    }
}
