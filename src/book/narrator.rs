//! Synthesis driver turning chapters into audio files.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info};

use super::chapter::{Chapter, ChapterResult, load_chapters};
use crate::text::{join_sentences, split_into_sentences};
use crate::tts::SpeechModel;

/// Language tag passed to every synthesis call.
const LANGUAGE: &str = "en";

/// Progress hook invoked as `(chapter_number, current_sentence, total_sentences)`.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(u32, usize, usize);

/// Owns the loaded speech model and renders chapters one at a time.
pub struct Narrator<M: SpeechModel> {
    model: M,
}

impl<M: SpeechModel> Narrator<M> {
    /// Wrap an already loaded model.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Render one chapter to `<output_dir>/chapter_NNN.wav`.
    ///
    /// # Arguments
    /// * `chapter` - The chapter to render
    /// * `output_dir` - Directory for the audio file, created if missing
    /// * `progress` - Called once with `(number, sentences, sentences)` after a successful render
    ///
    /// # Returns
    /// A success result with the output path and sentence count, or a failure result
    /// carrying the synthesis error text.
    ///
    /// # Errors
    /// Returns an error if the output directory cannot be created. Synthesis failures
    /// are recorded in the result instead.
    pub fn generate_chapter(&mut self, chapter: &Chapter, output_dir: &Path, progress: Option<ProgressCallback<'_>>) -> Result<ChapterResult> {
        std::fs::create_dir_all(output_dir).with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

        let sentences = split_into_sentences(&chapter.text);
        let total_sentences = sentences.len();

        info!("Generating chapter {}: {}", chapter.number, chapter.title);
        info!("Total sentences: {}", total_sentences);

        let output_file = output_dir.join(chapter.audio_file_name());
        let full_text = join_sentences(&sentences);

        match self.model.synthesize_to_file(&full_text, &output_file, LANGUAGE) {
            Ok(()) => {
                info!("Generated: {}", output_file.display());
                if let Some(progress) = progress {
                    progress(chapter.number, total_sentences, total_sentences);
                }
                Ok(ChapterResult::Success { output_file, sentences: total_sentences })
            }
            Err(e) => {
                error!("❌ Error generating chapter {}: {}", chapter.number, e);
                Ok(ChapterResult::Failure { error: e.to_string() })
            }
        }
    }

    /// Render every chapter in `chapters_file`, in order, never stopping on a failed chapter.
    ///
    /// # Errors
    /// Returns an error if the manifest cannot be read or parsed, or if the output
    /// directory cannot be created.
    pub fn generate_audiobook(&mut self, chapters_file: &Path, output_dir: &Path) -> Result<Vec<ChapterResult>> {
        let chapters = load_chapters(chapters_file)?;
        self.generate_chapters(&chapters, output_dir)
    }

    /// Render an in-memory chapter list sequentially.
    pub fn generate_chapters(&mut self, chapters: &[Chapter], output_dir: &Path) -> Result<Vec<ChapterResult>> {
        let total = chapters.len();
        info!("Processing {} chapters", total);

        chapters
            .iter()
            .enumerate()
            .map(|(i, chapter)| {
                info!("Chapter {}/{}", i + 1, total);
                self.generate_chapter(chapter, output_dir, None)
            })
            .collect()
    }
}
