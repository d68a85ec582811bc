use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default passage preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        // Collapse whitespace runs (newlines included) into single spaces
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_newlines_without_joining_words() {
        let processed = DefaultPreprocessor.process("The quick\nbrown  fox\r\njumps.");
        assert_eq!(processed, "The quick brown fox jumps.");
    }

    #[test]
    fn normalizes_fullwidth_characters() {
        let processed = DefaultPreprocessor.process("ＴＯＥＩＣ　ｔｅｓｔ");
        assert_eq!(processed, "TOEIC test");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(DefaultPreprocessor.process("   \n  "), "");
    }
}
