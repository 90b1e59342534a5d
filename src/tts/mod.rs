//! Text-to-speech module using sherpa-rs.
//!
//! Defines the speech model contract and provides the Kokoro implementation
//! that renders text straight to a WAV file.

mod kokoro;
mod model;
mod wav;

pub use kokoro::KokoroModel;
pub use model::{SpeechModel, SynthesisError};
