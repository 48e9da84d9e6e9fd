mod debug_report;

use curbtime::{CalendarPayload, Error, FALLBACK_REPLY, HourRange, Options, RegulationPayload};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::Level;

const DEFAULT_PLACE: &str = "you";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(config.color)
        .with_max_level(if config.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let features = match load(&config.features, RegulationPayload::from_json) {
        Ok(payload) => payload.into_features(),
        Err(err) => fail(err),
    };
    let days = match &config.calendar {
        Some(path) => match load(path, CalendarPayload::from_json) {
            Ok(payload) => payload.into_days(),
            Err(err) => fail(err),
        },
        None => Vec::new(),
    };

    let res = curbtime::aggregate_and_rank_verbose(&features, &config.place, &config.options);
    let suspensions = curbtime::summarize(&days);

    println!("{}", curbtime::compose_reply(&res.message, &suspensions.render()));

    if config.report {
        debug_report::print_run(&config, &res, &suspensions);
    }
}

fn load<T>(path: &Path, parse: fn(&str) -> curbtime::Result<T>) -> curbtime::Result<T> {
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    parse(&json)
}

fn fail(err: Error) -> ! {
    tracing::error!(error = %err, "could not load payload");
    println!("{FALLBACK_REPLY}");
    std::process::exit(1);
}

pub(crate) struct CliConfig {
    pub features: PathBuf,
    pub calendar: Option<PathBuf>,
    pub place: String,
    pub options: Options,
    pub report: bool,
    pub color: bool,
    pub verbose: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut features: Option<PathBuf> = None;
    let mut calendar: Option<PathBuf> = None;
    let mut place = DEFAULT_PLACE.to_string();
    let mut options = Options::default();
    let mut report = false;
    let mut color = io::stdout().is_terminal();
    let mut verbose = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            match &inline {
                Some(v) => Ok(v.clone()),
                None => args.next().ok_or_else(|| format!("error: {name} expects a value")),
            }
        };

        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("curbtime {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--report" => report = true,
            "-v" | "--verbose" => verbose = true,
            "-f" | "--features" => features = Some(PathBuf::from(value("--features")?)),
            "-c" | "--calendar" => calendar = Some(PathBuf::from(value("--calendar")?)),
            "-p" | "--place" => place = value("--place")?,
            "-n" | "--top" => {
                let raw = value("--top")?;
                options.top_n = raw.parse().map_err(|_| format!("error: invalid --top '{raw}' (expected a count)"))?;
            }
            "--hours" => options.hours = parse_hours(&value("--hours")?)?,
            _ => return Err(format!("error: unknown option '{arg}'\n\n{}", help_text())),
        }
    }

    let features = features.ok_or_else(|| format!("error: --features is required\n\n{}", help_text()))?;

    Ok(CliConfig { features, calendar, place, options, report, color, verbose })
}

fn parse_hours(value: &str) -> Result<HourRange, String> {
    let invalid = || format!("error: invalid --hours '{value}' (expected START-END, e.g. 9-18)");
    let (start, end) = value.split_once('-').ok_or_else(invalid)?;
    let start: u32 = start.trim().parse().map_err(|_| invalid())?;
    let end: u32 = end.trim().parse().map_err(|_| invalid())?;
    if start >= end || end > 24 {
        return Err(invalid());
    }
    Ok(HourRange { start, end })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "curbtime {version}

Ranks free-parking windows from a regulation payload and summarizes
alternate-side parking suspensions.

Usage:
  curbtime [OPTIONS] --features <file> [--calendar <file>]

Options:
  -f, --features <file>      Regulation GeoJSON payload (features[].properties.rule_simplified).
  -c, --calendar <file>      Suspension calendar payload (days[].items[]).
  -p, --place <text>         Place name used in the reply. Default: {place}
  -n, --top <N>              Number of windows to report. Default: {top}
  --hours <START-END>        Hours a window may start in. Default: {start}-{end}
  --report                   Print a run report after the reply.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -v, --verbose              Log every record to stderr.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  A payload could not be read or parsed.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        place = DEFAULT_PLACE,
        top = Options::default().top_n,
        start = HourRange::BUSINESS.start,
        end = HourRange::BUSINESS.end,
    )
}
