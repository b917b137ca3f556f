//! csvcompare - Column value comparison between two keyed CSV files

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use termcolor::{ColorChoice, StandardStream};

use csvcompare::compare::{run_comparison, Outcome};
use csvcompare::config::{Config, OutputFormat, DEFAULT_SAMPLE_SIZE};
use csvcompare::output::{default_report_path, write_report, OutputFactory};

const USAGE_EXAMPLES: &str = "\
EXAMPLES:
  csvcompare products_prod.csv products_new.csv Name
  csvcompare data1.csv data2.csv id differences.csv

NOTES:
  - The first file is the ORIGINAL (treated as correct)
  - Only columns present in BOTH files are compared
  - The key column matches records between the two files";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Compare column values of a new CSV file against an original one
#[derive(Parser, Debug)]
#[command(name = "csvcompare")]
#[command(author, version, about, long_about = None, after_help = USAGE_EXAMPLES)]
struct Cli {
    /// Original file, treated as correct
    #[arg(allow_hyphen_values = true)]
    original_file: PathBuf,

    /// New file to validate
    #[arg(allow_hyphen_values = true)]
    new_file: PathBuf,

    /// Column used to match records between the files
    #[arg(allow_hyphen_values = true)]
    key_column: String,

    /// Difference report to write (default: diferencas_<timestamp>.csv)
    #[arg(allow_hyphen_values = true)]
    output_file: Option<PathBuf>,

    /// Arguments past the output file are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    extra: Vec<String>,

    /// Field delimiter (default: tab for .tsv files, comma otherwise)
    #[arg(short, long, value_parser = parse_delimiter)]
    delimiter: Option<u8>,

    /// Console summary format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Number of differences listed in the terminal summary
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("delimiter must be a single ASCII character, got '{}'", s)),
        },
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => {
                    println!();
                    println!("{}", USAGE_EXAMPLES);
                    ExitCode::from(1)
                }
            };
        }
    };

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.extra.is_empty() {
        debug!("Ignoring extra arguments: {}", cli.extra.join(" "));
    }

    let config = Config::new(cli.original_file, cli.new_file, cli.key_column)
        .with_output_file(cli.output_file)
        .with_delimiter(cli.delimiter)
        .with_output_format(cli.format.into())
        .with_sample_size(cli.sample_size);

    let comparison = run_comparison(&config)?;

    let report_path = match comparison.outcome() {
        Outcome::Different => Some(
            config
                .output_file
                .clone()
                .unwrap_or_else(|| default_report_path(&Local::now())),
        ),
        Outcome::NoCommonColumns | Outcome::Identical => None,
    };

    let color_choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    let formatter = OutputFactory::create(&config);
    formatter.render(&comparison, &config, report_path.as_deref(), &mut stdout)?;

    if let Some(path) = report_path {
        write_report(&path, &comparison, config.delimiter_for(&config.original_file))?;
        info!(
            "Wrote {} difference record(s) to {}",
            comparison.diff.records.len(),
            path.display()
        );
        formatter.render_report_saved(&comparison, &path, &mut stdout)?;
    }

    Ok(())
}
