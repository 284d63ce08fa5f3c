mod bank;
mod cli;

use std::fmt;
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::AppServices;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::cli::{CheckArgs, Cli, Command, UiArgs};

#[derive(Debug)]
struct CheckFailed {
    dropped: usize,
}

impl fmt::Display for CheckFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} questions failed validation", self.dropped)
    }
}

impl std::error::Error for CheckFailed {}

/// `-v` picks the level; `RUST_LOG` wins when set.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn launch_ui(args: &UiArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.settings()?;
    let (storage, report) = bank::load(args.bank.as_deref(), args.policy())?;
    if !report.is_clean() {
        tracing::warn!(
            dropped = report.dropped.len(),
            "some questions were skipped; run `quiz check` for details"
        );
    }

    let app: Arc<dyn UiApp> = Arc::new(AppServices::new(&storage, settings));
    let context = build_app_context(&app);

    tracing::info!(
        quiz_size = settings.quiz_size(),
        auto_advance = ?settings.advance().delay(),
        "launching quiz window"
    );

    // Some desktop setups default to always-on-top; keep it a normal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn check(args: &CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (_storage, report) = bank::load(Some(&args.bank), args.policy())?;
    println!(
        "{}",
        bank::render_report(&args.bank.display().to_string(), &report)
    );
    if report.is_clean() {
        Ok(())
    } else {
        Err(CheckFailed {
            dropped: report.dropped.len(),
        }
        .into())
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.into_command() {
        Command::Ui(args) => launch_ui(&args),
        Command::Check(args) => check(&args),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
