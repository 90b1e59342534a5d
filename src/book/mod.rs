//! Book-level data model and the synthesis driver.

mod chapter;
mod narrator;

pub use chapter::ChapterResult;
pub use narrator::Narrator;
