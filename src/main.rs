use anyhow::Result;
use clap::Parser;
use electroscan::{
    config::Config,
    error::ProbeError,
    extractor::SevenZip,
    inspect,
    scanner::Scanner,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Exit codes
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

#[derive(Parser)]
#[command(name = "electroscan")]
#[command(
    author,
    version,
    about = "Check whether a Windows installer was built with Electron"
)]
struct Cli {
    /// Path to the .exe file to inspect
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // Diagnostics share stdout with the classification token.
            println!("{}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<u8> {
    let cli = Cli::parse();
    let config = Config::default();

    let file = match cli.file {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => return Err(ProbeError::InputNotProvided.into()),
    };

    let extractor = SevenZip::from_config(&config);
    let scanner = Scanner::new();

    let progress = if std::io::stderr().is_terminal() {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Inspecting {}...", file.display()));
        Some(pb)
    } else {
        None
    };

    let result = inspect(&file, &extractor, &scanner, &config);

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let classification = result?;
    println!("{}", classification.token());
    Ok(exit_codes::SUCCESS)
}
