use std::fmt;

use sim_core::model::Mode;
use storage::repository::Storage;

#[derive(Debug, Clone)]
struct Args {
    dataset: Option<String>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDataset { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDataset { raw } => write!(f, "invalid --dataset value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut dataset = std::env::var("MOS_DATASET").ok();

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dataset" => {
                    let value = require_value(&mut args, "--dataset")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataset { raw: value });
                    }
                    dataset = Some(value);
                }
                "--embedded" => dataset = None,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { dataset })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin dataset-check -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dataset <path>          JSON dataset to validate (default: embedded)");
    eprintln!("  --embedded                Validate the embedded dataset");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  MOS_DATASET");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = match &args.dataset {
        Some(path) => Storage::json_file(path),
        None => Storage::embedded(),
    };
    let dataset = storage.load()?;

    println!("{}", storage.datasets.describe());
    for mode in Mode::ALL {
        let resolved = dataset.resolve_mode(mode);
        if resolved == mode {
            println!(
                "  {:<12} {} projects, {} questions",
                mode.as_str(),
                dataset.project_count(mode),
                dataset.question_count(mode),
            );
        } else {
            println!("  {:<12} (absent, falls back to {resolved})", mode.as_str());
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
