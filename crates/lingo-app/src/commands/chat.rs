use lingo_config::Config;
use lingo_dify::DifyClient;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::dify_client;

pub async fn run(
    config: &Config,
    message: Option<String>,
    conversation: Option<String>,
    context: &str,
) -> anyhow::Result<()> {
    let client = dify_client(config)?;

    if let Some(message) = message {
        let reply = client
            .send_chat_message(context, &message, conversation.as_deref())
            .await?;
        println!("{}", reply.answer);
        tracing::info!(conversation_id = %reply.conversation_id, "chat turn complete");
        return Ok(());
    }

    if atty::is(atty::Stream::Stdin) {
        return interactive(client, conversation, context).await;
    }

    // Piped input: treat the whole of stdin as one message
    let message = std::io::read_to_string(std::io::stdin())?;
    anyhow::ensure!(!message.trim().is_empty(), "no message to send");

    let reply = client
        .send_chat_message(context, message.trim(), conversation.as_deref())
        .await?;
    println!("{}", reply.answer);

    Ok(())
}

/// Read-eval loop that threads the conversation id across turns.
async fn interactive(
    client: DifyClient,
    conversation: Option<String>,
    context: &str,
) -> anyhow::Result<()> {
    let mut conversation = conversation;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Chatting about the current passage. Empty line quits.");

    loop {
        print!("you> ");
        use std::io::Write;
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let message = line.trim();
        if message.is_empty() {
            break;
        }

        match client
            .send_chat_message(context, message, conversation.as_deref())
            .await
        {
            Ok(reply) => {
                println!("{}", reply.answer);
                conversation = Some(reply.conversation_id);
            }
            Err(error) => {
                tracing::warn!(%error, "chat turn failed");
                println!("(the chat service did not answer, try again)");
            }
        }
    }

    Ok(())
}
