//! Kokoro text-to-speech model backed by sherpa-rs.

use std::path::{Path, PathBuf};

use anyhow::Result;
use sherpa_rs::OnnxConfig;
use sherpa_rs::tts::{CommonTtsConfig, KokoroTts, KokoroTtsConfig};
use tracing::{debug, info};

use super::model::{SpeechModel, SynthesisError};
use super::wav::write_wav;
use crate::config::{AppConfig, Provider};

/// Language tag covered by the English lexicons.
const KOKORO_LANGUAGE: &str = "en";

/// Loaded Kokoro model bound to one compute provider.
pub struct KokoroModel {
    tts: KokoroTts,  // Kokoro TTS engine
    speaker_id: i32, // Speaker/voice identifier
    speed: f32,      // Speech speed multiplier
}

impl KokoroModel {
    /// Load the model named by `config.model` on `provider`.
    ///
    /// # Arguments
    /// * `config` - Application configuration (model location, voice, speed, threads)
    /// * `provider` - Compute provider the model runs on for the whole process
    ///
    /// # Returns
    /// A loaded `KokoroModel` ready to synthesize.
    ///
    /// # Errors
    /// Returns an error if the model directory or any required model file is missing.
    pub fn load(config: &AppConfig, provider: Provider) -> Result<Self> {
        let model_dir = config.model_path();
        let lexicon = model_dir.join(lexicon_for_voice(&config.voice));
        check_model_files(&model_dir, &lexicon)?;

        info!("Loading {} with {} provider...", config.model, provider);
        info!("Voice: {} (speaker ID: {})", config.voice, config.speaker_id);

        let dict_dir = model_dir.join("dict");
        let tts_config = KokoroTtsConfig {
            model: path_string(&model_dir.join("model.onnx")),
            voices: path_string(&model_dir.join("voices.bin")),
            tokens: path_string(&model_dir.join("tokens.txt")),
            data_dir: path_string(&model_dir.join("espeak-ng-data")),
            dict_dir: if dict_dir.is_dir() { path_string(&dict_dir) } else { String::new() },
            lexicon: path_string(&lexicon),
            lang: String::new(), // English is driven by the lexicon
            length_scale: 1.0 / config.speed,
            onnx_config: OnnxConfig {
                provider: provider.as_sherpa_provider().to_string(),
                num_threads: config.effective_threads(provider).try_into().unwrap_or(1),
                debug: config.verbose,
            },
            common_config: CommonTtsConfig { max_num_sentences: 1, ..Default::default() }, // Kokoro only supports 1
        };

        let tts = KokoroTts::new(tts_config);
        info!("Model loaded successfully");

        Ok(Self { tts, speaker_id: config.speaker_id, speed: config.speed })
    }
}

impl SpeechModel for KokoroModel {
    fn synthesize_to_file(&mut self, text: &str, output_path: &Path, language: &str) -> Result<(), SynthesisError> {
        if !language.eq_ignore_ascii_case(KOKORO_LANGUAGE) {
            return Err(SynthesisError::UnsupportedLanguage { requested: language.to_string(), supported: KOKORO_LANGUAGE.to_string() });
        }

        debug!("Synthesizing {} characters", text.chars().count());

        let audio = self.tts.create(text, self.speaker_id, self.speed).map_err(|e| SynthesisError::Generation(e.to_string()))?;
        if audio.samples.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        debug!("🎵 Generated speech ({} samples)", audio.samples.len());

        write_wav(output_path, &audio.samples, audio.sample_rate).map_err(|source| SynthesisError::Write { path: output_path.to_path_buf(), source })
    }
}

/// Pick the lexicon file for a Kokoro voice name.
/// British voices (bf_/bm_) use the GB lexicon, everything else the US one.
fn lexicon_for_voice(voice: &str) -> &'static str {
    match voice.get(..2) {
        Some("bf" | "bm") => "lexicon-gb-en.txt",
        _ => "lexicon-us-en.txt",
    }
}

/// Fail with the first missing model path.
fn check_model_files(model_dir: &Path, lexicon: &Path) -> Result<()> {
    if !model_dir.is_dir() {
        anyhow::bail!("Model directory does not exist: {}", model_dir.display());
    }

    let required: [PathBuf; 5] = [
        model_dir.join("model.onnx"),
        model_dir.join("voices.bin"),
        model_dir.join("tokens.txt"),
        model_dir.join("espeak-ng-data"),
        lexicon.to_path_buf(),
    ];

    for path in &required {
        if !path.exists() {
            anyhow::bail!("Required model file not found: {}", path.display());
        }
    }

    Ok(())
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
