//! Audiobook Narrator - render book chapters to spoken audio.
//!
//! Reads a JSON list of chapters, splits each chapter into sentences, and renders
//! it to a WAV file with a Kokoro text-to-speech model (via sherpa-rs). Progress
//! goes to stderr; the per-chapter results are printed to stdout as JSON.

mod book;
mod config;
mod text;
mod tts;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use book::{ChapterResult, Narrator};
use config::AppConfig;
use tts::KokoroModel;

fn main() -> Result<()> {
    // Parse command line arguments
    let config = AppConfig::from_args();

    // Respect RUST_LOG env var, fallback to verbose flag, default to info.
    // Logs go to stderr so stdout only carries the JSON results.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(if config.verbose { "debug" } else { "info" }))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(LocalTime::new(time::macros::format_description!("[hour]:[minute]:[second]")))
        .init();

    info!("📚 Audiobook Narrator v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!("❌ Configuration error: {}", e);
        std::process::exit(1);
    }
    config.log_config();

    // Device is chosen once and the model loaded once for the whole run
    let provider = config.resolve_provider();
    let model = KokoroModel::load(&config, provider).context("Failed to load TTS model")?;
    let mut narrator = Narrator::new(model);

    let results = narrator.generate_audiobook(&config.chapters_file, &config.output_dir)?;

    let failed = results.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        warn!("⚠️  {} succeeded, {} failed", results.len() - failed, failed);
    } else {
        info!("✅ {} chapters generated", results.len());
    }

    print_results(&results)
}

/// Write the result list to stdout as a single JSON document.
fn print_results(results: &[ChapterResult]) -> Result<()> {
    let json = serde_json::to_string(results).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}
