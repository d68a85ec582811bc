pub mod client;
pub mod textgen;
pub mod translator;

pub use client::{GeminiClient, GeminiError};
pub use textgen::generate_reading_text;
pub use translator::GeminiTranslator;
