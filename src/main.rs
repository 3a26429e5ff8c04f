//! statline - a status-line generator with sub-character Unicode meters
//!
//! Copyright (C) 2026 The statline contributors
//! Released under the GNU GPLv2+

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use statline::core::{Sample, Settings};
use statline::ui::StatusLine;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const COPYRIGHT: &str = "(C) 2026 The statline contributors.";
const LICENSE_SPDX: &str = env!("CARGO_PKG_LICENSE");

/// Environment variable holding the log filter
const LOG_ENV: &str = "STATLINE_LOG";

/// Convert SPDX license identifier to display string
fn license_display() -> &'static str {
    match LICENSE_SPDX {
        "GPL-2.0-or-later" => "GNU GPLv2+",
        "GPL-2.0" | "GPL-2.0-only" => "GNU GPLv2",
        "GPL-3.0-or-later" => "GNU GPLv3+",
        "GPL-3.0" | "GPL-3.0-only" => "GNU GPLv3",
        "MIT" => "MIT License",
        _ => LICENSE_SPDX,
    }
}

fn print_version_full() {
    println!("statline {}", VERSION);
    println!("{}", COPYRIGHT);
    println!("Released under the {}.", license_display());
}

fn print_version() {
    println!("statline {}", VERSION);
}

fn print_help() {
    print_version_full();
    println!();
    println!("Reads one line of key=value samples per tick from stdin and prints");
    println!("one status line per tick to stdout.");
    println!();
    println!("-c --config=FILE                Read settings from FILE");
    println!("-w --width=N                    Width of bar and line meters");
    println!("-g --history-width=N            Width of graph meters");
    println!("-U --no-unicode                 Do not use unicode but plain ASCII");
    println!("-u --unknown=TEXT               Text shown for unavailable values");
    println!("-n --max-iterations=NUMBER      Exit after NUMBER ticks");
    println!("-1 --once                       Exit after the first tick");
    println!("   --write-config               Write the effective settings and exit");
    println!("-h --help                       Print this help screen");
    println!("-V --version                    Print version info");
    println!();
    println!("Samples look like: cpu=0.42 mem=3120/7986 bat=87% swap=?");
    println!("Set {}=debug to log to stderr.", LOG_ENV);
}

/// statline - a status-line generator
#[derive(Parser, Debug)]
#[command(name = "statline")]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
struct Args {
    /// Read settings from FILE
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Width of bar and line meters
    #[arg(short = 'w', long = "width", value_name = "N")]
    width: Option<usize>,

    /// Width of graph meters
    #[arg(short = 'g', long = "history-width", value_name = "N")]
    history_width: Option<usize>,

    /// Do not use unicode but plain ASCII
    #[arg(short = 'U', long = "no-unicode")]
    no_unicode: bool,

    /// Text shown for unavailable values
    #[arg(short = 'u', long = "unknown", value_name = "TEXT")]
    unknown: Option<String>,

    /// Exit after NUMBER ticks
    #[arg(short = 'n', long = "max-iterations", value_name = "NUMBER")]
    max_iterations: Option<u64>,

    /// Exit after the first tick
    #[arg(short = '1', long = "once")]
    once: bool,

    /// Write the effective settings and exit
    #[arg(long = "write-config")]
    write_config: bool,

    /// Print this help screen
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    help: bool,

    /// Print version info
    #[arg(short = 'V', long = "version", action = ArgAction::SetTrue)]
    version: bool,
}

impl Args {
    fn max_iterations(&self) -> Option<u64> {
        if self.once {
            Some(1)
        } else {
            self.max_iterations
        }
    }

    /// Apply command line overrides on top of the loaded settings
    fn apply(&self, settings: &mut Settings) {
        if let Some(width) = self.width {
            settings.meter_width = width;
        }
        if let Some(width) = self.history_width {
            settings.history_width = width;
        }
        if let Some(ref unknown) = self.unknown {
            settings.unknown = unknown.clone();
        }
        if self.no_unicode {
            settings.allow_unicode = false;
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Parse one tick of input. A bad line still produces a tick, with every
/// value unavailable.
fn parse_sample(line: &str) -> Sample {
    match line.parse::<Sample>() {
        Ok(sample) => sample,
        Err(e) => {
            log::warn!("dropping sample line {:?}: {}", line, e);
            Sample::new()
        }
    }
}

/// Read ticks from `input` and write one status line per tick to `output`.
/// Returns the number of ticks rendered.
fn run(
    input: impl BufRead,
    mut output: impl Write,
    status_line: &mut StatusLine,
    settings: &Settings,
    max_iterations: Option<u64>,
) -> Result<u64> {
    let mut iterations = 0;
    let mut lines = input.lines();

    // Checked before reading so the last tick never waits on more input
    while max_iterations.is_none_or(|max| iterations < max) {
        let Some(line) = lines.next() else {
            break;
        };

        let line = line.context("failed to read sample from stdin")?;
        let sample = parse_sample(&line);
        if sample.is_empty() {
            log::debug!("tick {}: no readings", iterations);
        } else {
            log::debug!("tick {}: {} readings", iterations, sample.len());
        }

        status_line.update(&sample);
        let rendered = status_line.render(settings);

        writeln!(output, "{}", rendered).context("failed to write status line")?;
        output.flush().context("failed to flush status line")?;

        iterations += 1;
    }

    Ok(iterations)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Handle help and version flags first
    if args.help {
        print_help();
        return Ok(());
    }
    if args.version {
        print_version();
        return Ok(());
    }

    init_logging();

    // Create settings and load from config file
    let mut settings = match args.config {
        Some(ref path) => Settings::with_file(path.clone()),
        None => Settings::new(),
    };
    if let Err(e) = settings.load() {
        log::warn!("failed to load settings: {:#}", e);
    }

    // Apply command line arguments
    args.apply(&mut settings);
    log::debug!("effective settings: {:?}", settings);

    if args.write_config {
        settings.write().context("failed to write settings")?;
        if let Some(ref path) = settings.filename {
            eprintln!("wrote {}", path.display());
        }
        return Ok(());
    }

    let mut status_line = StatusLine::from_settings(&settings);
    if status_line.is_empty() {
        log::warn!("no components configured, printing empty lines");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        stdin.lock(),
        stdout.lock(),
        &mut status_line,
        &settings,
        args.max_iterations(),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lines(settings: &Settings, input: &str, max: Option<u64>) -> (u64, String) {
        let mut status_line = StatusLine::from_settings(settings);
        let mut output = Vec::new();
        let ticks = run(input.as_bytes(), &mut output, &mut status_line, settings, max).unwrap();
        (ticks, String::from_utf8(output).unwrap())
    }

    fn settings() -> Settings {
        let mut settings = Settings::with_file("/nonexistent/statlinerc");
        settings.components = vec![
            "cpu,percent,{}%".parse().unwrap(),
            "text: ,text,{}".parse().unwrap(),
            "mem,ascii,[{}]".parse().unwrap(),
        ];
        settings.meter_width = 4;
        settings
    }

    // ==================== Args Tests ====================

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["statline", "-w", "8", "-g", "20", "-U", "-u", "?"]).unwrap();
        assert_eq!(args.width, Some(8));
        assert_eq!(args.history_width, Some(20));
        assert!(args.no_unicode);
        assert_eq!(args.unknown.as_deref(), Some("?"));
        assert_eq!(args.max_iterations(), None);
    }

    #[test]
    fn test_args_once() {
        let args = Args::try_parse_from(["statline", "-1", "-n", "5"]).unwrap();
        assert_eq!(args.max_iterations(), Some(1));

        let args = Args::try_parse_from(["statline", "--max-iterations", "5"]).unwrap();
        assert_eq!(args.max_iterations(), Some(5));
    }

    #[test]
    fn test_args_apply() {
        let args = Args::try_parse_from(["statline", "--width", "3", "--no-unicode"]).unwrap();
        let mut settings = Settings::new();
        args.apply(&mut settings);
        assert_eq!(settings.meter_width, 3);
        assert_eq!(settings.history_width, Settings::DEFAULT_HISTORY_WIDTH);
        assert!(!settings.allow_unicode);
        assert_eq!(settings.unknown, "n/a");
    }

    // ==================== Run Tests ====================

    #[test]
    fn test_run_one_line_per_tick() {
        let (ticks, output) = run_lines(&settings(), "cpu=0.42 mem=0.5\ncpu=0.07 mem=1\n", None);
        assert_eq!(ticks, 2);
        assert_eq!(output, "42% [==  ]\n7% [====]\n");
    }

    #[test]
    fn test_run_bad_line_renders_unknown() {
        let (ticks, output) = run_lines(&settings(), "garbage\ncpu=0.5\n", None);
        assert_eq!(ticks, 2);
        assert_eq!(output, "n/a% [n/a]\n50% [n/a]\n");
    }

    #[test]
    fn test_run_blank_line_is_a_tick() {
        let (ticks, output) = run_lines(&settings(), "\n", None);
        assert_eq!(ticks, 1);
        assert_eq!(output, "n/a% [n/a]\n");
    }

    #[test]
    fn test_run_stops_at_max_iterations() {
        let (ticks, output) = run_lines(&settings(), "cpu=0.1\ncpu=0.2\ncpu=0.3\n", Some(2));
        assert_eq!(ticks, 2);
        assert_eq!(output.lines().count(), 2);

        let (ticks, output) = run_lines(&settings(), "cpu=0.1\n", Some(0));
        assert_eq!(ticks, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_leaves_unread_input_after_last_tick() {
        let settings = settings();
        let mut status_line = StatusLine::from_settings(&settings);
        let mut input = std::io::Cursor::new("cpu=0.1\ncpu=0.2\ncpu=0.3\n".as_bytes());
        let mut output = Vec::new();

        let ticks = run(&mut input, &mut output, &mut status_line, &settings, Some(1)).unwrap();
        assert_eq!(ticks, 1);
        assert_eq!(input.position(), 8);
        assert_eq!(String::from_utf8(output).unwrap(), "10% [n/a]\n");
    }

    // ==================== Version Tests ====================

    #[test]
    fn test_copyright_names_statline() {
        assert!(COPYRIGHT.contains("statline"));
        assert_eq!(license_display(), "GNU GPLv2+");
    }
}
