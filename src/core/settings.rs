//! Settings module
//!
//! This module contains user-configurable settings for statline.

use std::fmt;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use super::units::{HumanBase, HumanFormat};
use crate::meters::MeterMode;

/// Errors from parsing a `component=` setting
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentParseError {
    #[error("component {spec:?} has no meter kind")]
    EmptyKind { spec: String },
    #[error("component {spec:?} has no mode")]
    MissingMode { spec: String },
    #[error("unknown meter mode {mode:?}")]
    UnknownMode { mode: String },
}

/// One entry of the status line: `KIND[:PARAM],MODE,TEMPLATE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentConfig {
    /// Meter kind, or the sample key for gauge meters
    pub kind: String,
    /// Kind-specific argument (date format, literal text)
    pub param: Option<String>,
    pub mode: MeterMode,
    /// Text around the value; the first `{}` is replaced by it
    pub template: String,
}

impl ComponentConfig {
    pub fn new(kind: &str, param: Option<&str>, mode: MeterMode, template: &str) -> Self {
        ComponentConfig {
            kind: kind.to_string(),
            param: param.map(str::to_string),
            mode,
            template: template.to_string(),
        }
    }
}

impl FromStr for ComponentConfig {
    type Err = ComponentParseError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let mut fields = spec.splitn(3, ',');

        let source = fields.next().unwrap_or_default();
        let (kind, param) = match source.split_once(':') {
            Some((kind, param)) => (kind.trim(), Some(param)),
            None => (source.trim(), None),
        };
        if kind.is_empty() {
            return Err(ComponentParseError::EmptyKind {
                spec: spec.to_string(),
            });
        }

        let mode = fields
            .next()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| ComponentParseError::MissingMode {
                spec: spec.to_string(),
            })?;
        let mode = MeterMode::from_name(mode).ok_or_else(|| ComponentParseError::UnknownMode {
            mode: mode.to_string(),
        })?;

        let template = fields.next().unwrap_or("{}");

        Ok(ComponentConfig::new(kind, param, mode, template))
    }
}

impl fmt::Display for ComponentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind)?;
        if let Some(param) = &self.param {
            write!(f, ":{}", param)?;
        }
        write!(f, ",{},{}", self.mode.name(), self.template)
    }
}

/// Main settings structure
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub filename: Option<PathBuf>,

    // Meter geometry
    pub meter_width: usize,
    pub history_width: usize,

    // Display settings
    pub unknown: String,
    pub allow_unicode: bool,
    pub ascii_fill: char,
    pub ascii_unfill: char,
    pub max_percent_99: bool,
    pub human_base: HumanBase,
    pub human_format: HumanFormat,

    /// Maximum length of the status line, in bytes
    pub max_length: usize,

    pub components: Vec<ComponentConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new()
    }
}

impl Settings {
    pub const DEFAULT_METER_WIDTH: usize = 10;
    pub const DEFAULT_HISTORY_WIDTH: usize = 10;
    pub const DEFAULT_MAX_LENGTH: usize = 2048;

    pub fn new() -> Self {
        Settings {
            filename: Self::default_config_path(),
            meter_width: Self::DEFAULT_METER_WIDTH,
            history_width: Self::DEFAULT_HISTORY_WIDTH,
            unknown: "n/a".to_string(),
            allow_unicode: true,
            ascii_fill: '=',
            ascii_unfill: ' ',
            max_percent_99: false,
            human_base: HumanBase::Binary,
            human_format: HumanFormat::Significant,
            max_length: Self::DEFAULT_MAX_LENGTH,
            components: Self::default_components(),
        }
    }

    /// Settings backed by a specific file
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Settings {
            filename: Some(path.into()),
            ..Settings::new()
        }
    }

    fn default_components() -> Vec<ComponentConfig> {
        let separator = ComponentConfig::new("text", Some(" \u{2506} "), MeterMode::Text, "{}");
        vec![
            ComponentConfig::new("cpu", None, MeterMode::Percent, "{}%"),
            ComponentConfig::new("cpu", None, MeterMode::Graph, "{}"),
            separator.clone(),
            ComponentConfig::new("mem", None, MeterMode::Bar, "[{}]"),
            ComponentConfig::new("mem", None, MeterMode::Value, "{}B"),
            separator,
            ComponentConfig::new("datetime", Some("%a %b %d %R"), MeterMode::Text, "{}"),
        ]
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|config_dir| config_dir.join("statline").join("statlinerc"))
    }

    /// Load settings from the config file
    pub fn load(&mut self) -> anyhow::Result<()> {
        let path = match &self.filename {
            Some(p) => p.clone(),
            None => return Ok(()),
        };

        if !path.exists() {
            log::debug!("no settings file at {}", path.display());
            return Ok(());
        }

        let file = fs::File::open(&path)?;
        let reader = BufReader::new(file);

        let mut components = Vec::new();
        let mut saw_components = false;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim_start();

            if line.trim_end().is_empty() || line.starts_with('#') {
                continue;
            }

            // Values are not trimmed: trailing spaces are meaningful in
            // templates and fill characters.
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key == "component" {
                    saw_components = true;
                    match value.parse::<ComponentConfig>() {
                        Ok(component) => components.push(component),
                        Err(e) => log::warn!("ignoring component {:?}: {}", value, e),
                    }
                } else {
                    self.parse_setting(key, value);
                }
            }
        }

        if saw_components {
            self.components = components;
        }

        Ok(())
    }

    /// Parse a single setting line
    fn parse_setting(&mut self, key: &str, value: &str) {
        let trimmed = value.trim();
        match key {
            "meter_width" => match trimmed.parse::<usize>() {
                Ok(v) => self.meter_width = v,
                Err(_) => Self::warn_invalid(key, value),
            },
            "history_width" => match trimmed.parse::<usize>() {
                Ok(v) => self.history_width = v,
                Err(_) => Self::warn_invalid(key, value),
            },
            "max_length" => match trimmed.parse::<usize>() {
                Ok(v) => self.max_length = v,
                Err(_) => Self::warn_invalid(key, value),
            },
            "unknown" => {
                self.unknown = value.to_string();
            }
            "allow_unicode" => {
                self.allow_unicode = trimmed == "1";
            }
            "max_percent_99" => {
                self.max_percent_99 = trimmed == "1";
            }
            "ascii_fill" => match Self::single_char(value) {
                Some(c) => self.ascii_fill = c,
                None => Self::warn_invalid(key, value),
            },
            "ascii_unfill" => match Self::single_char(value) {
                Some(c) => self.ascii_unfill = c,
                None => Self::warn_invalid(key, value),
            },
            "human_base" => match trimmed.parse::<i32>().ok().and_then(HumanBase::from_i32) {
                Some(base) => self.human_base = base,
                None => Self::warn_invalid(key, value),
            },
            "human_format" => match HumanFormat::from_name(trimmed) {
                Some(format) => self.human_format = format,
                None => Self::warn_invalid(key, value),
            },
            _ => {
                log::debug!("ignoring unknown setting {:?}", key);
            }
        }
    }

    fn single_char(value: &str) -> Option<char> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    fn warn_invalid(key: &str, value: &str) {
        log::warn!("ignoring invalid value {:?} for {}", value, key);
    }

    /// Write settings to the config file
    pub fn write(&self) -> anyhow::Result<()> {
        let path = match &self.filename {
            Some(p) => p.clone(),
            None => return Ok(()),
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(&path)?;

        writeln!(file, "# statline configuration file")?;
        writeln!(file, "# Automatically generated by statline")?;
        writeln!(file)?;

        writeln!(file, "meter_width={}", self.meter_width)?;
        writeln!(file, "history_width={}", self.history_width)?;
        writeln!(file, "unknown={}", self.unknown)?;
        writeln!(
            file,
            "allow_unicode={}",
            if self.allow_unicode { 1 } else { 0 }
        )?;
        writeln!(file, "ascii_fill={}", self.ascii_fill)?;
        writeln!(file, "ascii_unfill={}", self.ascii_unfill)?;
        writeln!(
            file,
            "max_percent_99={}",
            if self.max_percent_99 { 1 } else { 0 }
        )?;
        writeln!(file, "human_base={}", self.human_base.as_i32())?;
        writeln!(file, "human_format={}", self.human_format.name())?;
        writeln!(file, "max_length={}", self.max_length)?;

        writeln!(file)?;
        writeln!(file, "# component=KIND[:PARAM],MODE,TEMPLATE")?;
        for component in &self.components {
            writeln!(file, "component={}", component)?;
        }

        Ok(())
    }
}
