pub mod types;

pub use types::{GenerateWordsParams, SavedWord, Word, WordEntry};
