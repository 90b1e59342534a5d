//! Chapter manifest records and per-chapter results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One unit of source text, rendered to exactly one audio file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Chapter {
    pub number: u32,
    pub title: String,
    pub text: String,
}

impl Chapter {
    /// File name for this chapter's audio, zero-padded to at least three digits.
    pub fn audio_file_name(&self) -> String {
        format!("chapter_{:03}.wav", self.number)
    }
}

/// Outcome of rendering one chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterResult {
    Success { output_file: PathBuf, sentences: usize },
    Failure { error: String },
}

impl ChapterResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ChapterResult::Success { .. })
    }
}

impl Serialize for ChapterResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChapterResult::Success { output_file, sentences } => {
                let mut state = serializer.serialize_struct("ChapterResult", 3)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("output_file", output_file)?;
                state.serialize_field("sentences", sentences)?;
                state.end()
            }
            ChapterResult::Failure { error } => {
                let mut state = serializer.serialize_struct("ChapterResult", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}

/// Load the ordered chapter list from a JSON manifest.
pub fn load_chapters(path: &Path) -> Result<Vec<Chapter>> {
    let data = std::fs::read_to_string(path).with_context(|| format!("Failed to read chapters file {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Failed to parse chapters file {}", path.display()))
}
