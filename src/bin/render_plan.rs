//! Render a plan text file to PDF.
//!
//! Usage:
//!   render_plan plan.md
//!   render_plan plan.md -o wochenplan.pdf --config layout.json --compress --date 2026-10-19
//!
//! Set `RUST_LOG=debug` to trace page breaks and table geometry.

use chrono::NaiveDate;
use planpdf::api::ReportBuilder;
use planpdf::{Error, LayoutConfig};
use std::fs;
use std::path::PathBuf;
use std::process;

const USAGE: &str =
    "usage: render_plan <input.md> [-o output.pdf] [--config layout.json] [--compress] [--date YYYY-MM-DD]";

struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    compress: bool,
    date: Option<NaiveDate>,
}

impl CliArgs {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut output = None;
        let mut config = None;
        let mut compress = false;
        let mut date = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-o" | "--output" => {
                    i += 1;
                    output = Some(PathBuf::from(value(&args, i, "-o")?));
                },
                "--config" => {
                    i += 1;
                    config = Some(PathBuf::from(value(&args, i, "--config")?));
                },
                "--compress" => {
                    compress = true;
                },
                "--date" => {
                    i += 1;
                    let raw = value(&args, i, "--date")?;
                    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                        .map_err(|e| format!("invalid date '{}': {}", raw, e))?;
                    date = Some(parsed);
                },
                "-h" | "--help" => return Err(USAGE.to_string()),
                arg if arg.starts_with('-') => return Err(format!("unknown option '{}'", arg)),
                arg => {
                    if input.is_some() {
                        return Err(format!("unexpected argument '{}'", arg));
                    }
                    input = Some(PathBuf::from(arg));
                },
            }
            i += 1;
        }

        Ok(Self {
            input: input.ok_or_else(|| USAGE.to_string())?,
            output,
            config,
            compress,
            date,
        })
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} needs a value", flag))
}

fn run(args: CliArgs) -> Result<PathBuf, Error> {
    let mut config = match &args.config {
        Some(path) => LayoutConfig::from_json(&fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };
    if args.compress {
        config = config.with_compression(true);
    }
    if let Some(date) = args.date {
        config = config.with_date(date);
    }

    let text = fs::read_to_string(&args.input)?;
    let report = ReportBuilder::new().with_config(config).render(&text)?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(report.filename()));
    report.save(&output)?;
    log::info!("{} -> {} ({} pages)", args.input.display(), output.display(), report.page_count());
    Ok(output)
}

fn main() {
    env_logger::init();

    let args = match CliArgs::from_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        },
    };

    match run(args) {
        Ok(output) => println!("{}", output.display()),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        },
    }
}
