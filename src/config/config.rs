//! Application configuration and CLI argument parsing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::provider::{Provider, SystemProbe, select_provider};

/// Default multilingual Kokoro model identifier.
pub const DEFAULT_MODEL: &str = "kokoro-multi-lang-v1_0";

/// Audiobook narrator configuration.
#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "audiobook-narrator")]
#[command(author, version, about = "Render book chapters to spoken audio", long_about = None)]
pub struct AppConfig {
    /// JSON manifest with a list of {number, title, text} chapters
    pub chapters_file: PathBuf,

    /// Directory receiving one chapter_NNN.wav per chapter
    pub output_dir: PathBuf,

    /// Directory containing TTS model files
    #[arg(long, short = 'd', default_value_os_t = default_model_dir())]
    pub model_dir: PathBuf,

    /// Model identifier, resolved to <model-dir>/tts/<model>
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Hardware acceleration provider (auto-detected if not specified)
    #[arg(long, value_enum)]
    pub provider: Option<Provider>,

    /// Kokoro voice name; the prefix picks the English lexicon (af/am: US, bf/bm: GB)
    #[arg(long, default_value = "af_bella")]
    pub voice: String,

    /// Kokoro speaker ID matching the voice (af_bella=2 in v1.0, bf_emma=21)
    #[arg(long, default_value = "2")]
    pub speaker_id: i32,

    /// Speech speed multiplier
    #[arg(long, default_value = "1.0")]
    pub speed: f32,

    /// Number of inference threads (0 = auto-detect based on CPU cores)
    #[arg(long, default_value = "0")]
    pub num_threads: usize,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse configuration from command line arguments.
    ///
    /// Missing positional arguments print usage to stderr and exit non-zero.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Resolve the compute provider once: the explicit override, else the probed best.
    pub fn resolve_provider(&self) -> Provider {
        self.provider.unwrap_or_else(|| select_provider(&SystemProbe))
    }

    /// Thread count for the given provider.
    ///
    /// With CUDA the GPU handles parallelism, so a single CPU thread avoids contention.
    /// On CPU, cores/3 leaves headroom for the rest of the system.
    pub fn effective_threads(&self, provider: Provider) -> usize {
        if self.num_threads > 0 {
            self.num_threads
        } else if provider == Provider::Cuda {
            1
        } else {
            (num_cpus::get() / 3).max(1)
        }
    }

    /// Get the directory holding the selected model.
    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join("tts").join(&self.model)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            anyhow::bail!("Model identifier must not be empty");
        }

        if !(self.speed.is_finite() && self.speed > 0.0) {
            anyhow::bail!("Speech speed must be positive");
        }

        Ok(())
    }

    /// Log the current configuration.
    pub fn log_config(&self) {
        info!("Configuration:");
        info!("  Chapters file: {}", self.chapters_file.display());
        info!("  Output directory: {}", self.output_dir.display());
        info!("  Model: {} ({})", self.model, self.model_path().display());
        info!("  Voice: {} (speaker ID: {})", self.voice, self.speaker_id);
        info!("  Speed: {}", self.speed);
    }
}

/// Get the default model directory (~/.audiobook-narrator/models).
fn default_model_dir() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        home_dir.join(".audiobook-narrator").join("models")
    } else {
        PathBuf::from("models")
    }
}
