//! Speech model contract used by the narrator.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A recoverable failure while rendering one piece of text.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Unsupported language '{requested}' (model speaks '{supported}')")]
    UnsupportedLanguage { requested: String, supported: String },

    #[error("TTS generation failed: {0}")]
    Generation(String),

    #[error("TTS produced no audio")]
    EmptyAudio,

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
}

/// A loaded speech model that renders text directly to an audio file.
///
/// Calls are blocking and must not overlap, hence `&mut self`.
pub trait SpeechModel {
    /// Render `text` in `language` and write the audio to `output_path`.
    fn synthesize_to_file(&mut self, text: &str, output_path: &Path, language: &str) -> Result<(), SynthesisError>;
}
