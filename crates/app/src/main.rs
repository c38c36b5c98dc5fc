use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CopyDownloader, SimulatorConfig};
use sim_core::model::Mode;
use storage::repository::Storage;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimerSecs { raw: String },
    InvalidPath { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimerSecs { raw } => write!(f, "invalid --timer-secs value: {raw}"),
            ArgsError::InvalidPath { flag, raw } => write!(f, "invalid {flag} value: {raw:?}"),
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

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidPath { flag, raw: value });
    }
    Ok(PathBuf::from(value))
}

fn parse_timer_secs(raw: String) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ArgsError::InvalidTimerSecs { raw }),
    }
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }
}

#[derive(Debug)]
struct Args {
    dataset: Option<PathBuf>,
    files_dir: PathBuf,
    downloads_dir: PathBuf,
    timer_secs: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--dataset <path>] [--files <dir>] [--downloads <dir>] [--timer-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --dataset     embedded question bank");
    eprintln!("  --files       ./public");
    eprintln!("  --downloads   the user's download directory");
    eprintln!("  --timer-secs  3000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MOS_DATASET, MOS_FILES_DIR, MOS_DOWNLOADS_DIR, MOS_TIMER_SECS, RUST_LOG");
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut dataset = env_path("MOS_DATASET");
        let mut files_dir = env_path("MOS_FILES_DIR").unwrap_or_else(|| PathBuf::from("./public"));
        let mut downloads_dir = env_path("MOS_DOWNLOADS_DIR")
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let mut timer_secs = match std::env::var("MOS_TIMER_SECS") {
            Ok(raw) => parse_timer_secs(raw)?,
            Err(_) => SimulatorConfig::default().timer_secs,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dataset" => dataset = Some(require_path(args, "--dataset")?),
                "--files" => files_dir = require_path(args, "--files")?,
                "--downloads" => downloads_dir = require_path(args, "--downloads")?,
                "--timer-secs" => {
                    timer_secs = parse_timer_secs(require_value(args, "--timer-secs")?)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            dataset,
            files_dir,
            downloads_dir,
            timer_secs,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    log::debug!("{parsed:?}");

    let storage = parsed
        .dataset
        .as_ref()
        .map_or_else(Storage::embedded, Storage::json_file);
    let downloader = Arc::new(CopyDownloader::new(&parsed.files_dir, &parsed.downloads_dir));
    log::info!("project files are saved to {}", downloader.target_dir().display());
    let config = SimulatorConfig::default().with_timer_secs(parsed.timer_secs);
    let services = AppServices::load(&storage, downloader, config)?;

    let dataset = services.dataset();
    log::info!(
        "ready: {} practice, {} challenge and {} exam projects",
        dataset.project_count(Mode::Practice),
        dataset.project_count(Mode::Challenges),
        dataset.project_count(Mode::Exam)
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("MOS Simulator")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
