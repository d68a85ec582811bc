use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lingo_config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "lingo", version, about = "Language-learning toolkit: passages, word lists, quizzes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a reading passage for a TOEIC level and theme
    Text {
        #[arg(long, default_value_t = 500)]
        toeic: u32,
        #[arg(long, default_value_t = 50)]
        words: u32,
        #[arg(long)]
        theme: String,
    },
    /// Generate a reading passage from a web page
    FromUrl {
        #[arg(long)]
        url: String,
        #[arg(long, default_value_t = 500)]
        toeic: u32,
        #[arg(long, default_value_t = 50)]
        words: u32,
    },
    /// Translate text (English to Japanese by default)
    Translate {
        text: String,
        #[arg(long, default_value = "en")]
        from: String,
        #[arg(long, default_value = "ja")]
        to: String,
    },
    /// Extract a vocabulary list from a passage
    Words {
        #[arg(long, default_value_t = 500)]
        toeic: u32,
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Source passage; falls back to --file, then stdin
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        /// Print the list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Chat about a passage; interactive when run from a terminal
    Chat {
        message: Option<String>,
        /// Continue an existing conversation
        #[arg(long)]
        conversation: Option<String>,
        /// Passage the assistant answers about
        #[arg(long, default_value = "")]
        context: String,
    },
    /// Play a multiple-choice quiz built from saved words
    Quiz {
        #[arg(long, default_value_t = 5)]
        size: usize,
    },
    /// Manage saved words
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
}

#[derive(Subcommand)]
enum SavedAction {
    /// List saved words, newest first
    List,
    /// Save one word
    Add {
        english: String,
        japanese: String,
        #[arg(long, default_value = "")]
        part_of_speech: String,
        #[arg(long, default_value = "")]
        example: String,
    },
    /// Delete a saved word by id
    Remove { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::new();

    match cli.command {
        Command::Text {
            toeic,
            words,
            theme,
        } => commands::text::run(&config, toeic, words, &theme).await,
        Command::FromUrl { url, toeic, words } => {
            commands::from_url::run(&config, &url, toeic, words).await
        }
        Command::Translate { text, from, to } => {
            commands::translate::run(&config, &text, from, to).await
        }
        Command::Words {
            toeic,
            count,
            text,
            file,
            json,
        } => commands::words::run(&config, toeic, count, text, file, json).await,
        Command::Chat {
            message,
            conversation,
            context,
        } => commands::chat::run(&config, message, conversation, &context).await,
        Command::Quiz { size } => commands::quiz::run(&config, size).await,
        Command::Saved { action } => match action {
            SavedAction::List => commands::saved::list(&config).await,
            SavedAction::Add {
                english,
                japanese,
                part_of_speech,
                example,
            } => commands::saved::add(&config, english, japanese, part_of_speech, example).await,
            SavedAction::Remove { id } => commands::saved::remove(&config, id).await,
        },
    }
}
