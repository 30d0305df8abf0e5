mod config;
mod submission;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use tracing::debug;
use tracing_subscriber::FmtSubscriber;

use crate::config::CliConfig;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = CliConfig::from_env()?;

    // Logs go to stderr so stdout carries only the submission
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = std::env::args().nth(1).map(PathBuf::from).or(config.input);
    let raw = read_payload(input.as_ref())?;

    let submission = submission::build_submission(raw)?;

    let output = if config.pretty {
        serde_json::to_string_pretty(&submission)?
    } else {
        serde_json::to_string(&submission)?
    };
    println!("{output}");

    Ok(())
}

fn read_payload(path: Option<&PathBuf>) -> Result<serde_json::Value> {
    let text = match path {
        Some(path) => {
            debug!(path = %path.display(), "reading payload file");
            fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).wrap_err("Failed to read stdin")?;
            text
        }
    };
    serde_json::from_str(&text).wrap_err("Payload is not valid JSON")
}
