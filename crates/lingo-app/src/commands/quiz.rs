use lingo_config::Config;
use lingo_core::quiz::build_quiz;
use lingo_types::Word;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::store_client;

pub async fn run(config: &Config, size: usize) -> anyhow::Result<()> {
    let store = store_client(config)?;

    let saved = store.list_words(&config.store.user_id).await?;
    anyhow::ensure!(!saved.is_empty(), "no saved words to quiz on");

    let pool: Vec<Word> = saved
        .into_iter()
        .map(|row| Word {
            id: row.id,
            entry: row.entry,
        })
        .collect();

    let quiz = build_quiz(&pool, size, &mut rand::thread_rng());
    let total = quiz.len();
    let mut score = 0;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    for (number, question) in quiz.iter().enumerate() {
        println!("\n{}. What does \"{}\" mean?", number + 1, question.word.entry.english);
        for (index, option) in question.options.iter().enumerate() {
            println!("  {}) {}", index + 1, option);
        }

        let picked = loop {
            print!("> ");
            use std::io::Write;
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                println!("\nQuiz abandoned.");
                return Ok(());
            };

            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=question.options.len()).contains(&choice) => {
                    break &question.options[choice - 1];
                }
                _ => println!("pick 1-{}", question.options.len()),
            }
        };

        if *picked == question.answer {
            score += 1;
            println!("correct");
        } else {
            println!("wrong, the answer is: {}", question.answer);
        }
    }

    println!("\nScore: {score}/{total}");
    Ok(())
}
