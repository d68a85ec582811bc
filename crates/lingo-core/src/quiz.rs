use lingo_types::Word;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::sample::sample;

/// One multiple-choice question: pick the Japanese gloss of `word.english`.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub word: Word,
    pub options: Vec<String>,
    pub answer: String,
}

/// Build up to `size` questions from `words`.
///
/// Each question offers the correct gloss plus up to three distractor
/// glosses taken from the other words. With fewer than four words in the
/// pool a question simply has fewer options.
pub fn build_quiz<R: Rng + ?Sized>(words: &[Word], size: usize, rng: &mut R) -> Vec<QuizQuestion> {
    let picked = sample(words.to_vec(), size, rng);

    picked
        .into_iter()
        .map(|word| {
            let answer = word.entry.japanese.clone();

            let mut options = vec![answer.clone()];
            options.extend(
                words
                    .iter()
                    .filter(|other| other.id != word.id)
                    .take(3)
                    .map(|other| other.entry.japanese.clone()),
            );
            options.shuffle(rng);

            QuizQuestion {
                word,
                options,
                answer,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use lingo_types::WordEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn word(id: i64, english: &str, japanese: &str) -> Word {
        Word {
            id,
            entry: WordEntry {
                english: english.into(),
                japanese: japanese.into(),
                part_of_speech: String::new(),
                example: String::new(),
            },
        }
    }

    fn pool() -> Vec<Word> {
        vec![
            word(1, "run", "走る"),
            word(2, "jump", "跳ぶ"),
            word(3, "walk", "歩く"),
            word(4, "swim", "泳ぐ"),
            word(5, "fly", "飛ぶ"),
        ]
    }

    #[test]
    fn questions_always_contain_their_answer() {
        let mut rng = StdRng::seed_from_u64(3);
        let quiz = build_quiz(&pool(), 5, &mut rng);

        assert_eq!(quiz.len(), 5);
        for question in &quiz {
            assert_eq!(question.options.len(), 4);
            assert!(question.options.contains(&question.answer));
            assert_eq!(question.answer, question.word.entry.japanese);
        }
    }

    #[test]
    fn small_pools_shrink_the_quiz_and_the_options() {
        let mut rng = StdRng::seed_from_u64(3);
        let two_words = pool().into_iter().take(2).collect::<Vec<_>>();
        let quiz = build_quiz(&two_words, 5, &mut rng);

        assert_eq!(quiz.len(), 2);
        for question in &quiz {
            assert_eq!(question.options.len(), 2);
        }
    }

    #[test]
    fn distractors_come_from_other_words() {
        let mut rng = StdRng::seed_from_u64(9);
        let quiz = build_quiz(&pool(), 1, &mut rng);
        let question = &quiz[0];

        let correct_count = question
            .options
            .iter()
            .filter(|option| **option == question.answer)
            .count();
        assert_eq!(correct_count, 1);
    }
}
