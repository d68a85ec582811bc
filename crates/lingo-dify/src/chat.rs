use anyhow::Context;
use serde::Deserialize;
use serde_json::json;

use crate::client::DifyClient;

/// Answer to one chat turn. `conversation_id` is fed back on the next turn
/// to stay in the same conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub answer: String,
    pub conversation_id: String,
}

impl DifyClient {
    /// Send one chat message, optionally continuing a conversation.
    ///
    /// `input_text` is the study passage the assistant answers about.
    pub async fn send_chat_message(
        &self,
        input_text: &str,
        message: &str,
        conversation_id: Option<&str>,
    ) -> anyhow::Result<ChatReply> {
        let body = json!({
            "inputs": { "input": input_text },
            "query": message,
            "response_mode": "blocking",
            "conversation_id": conversation_id.unwrap_or(""),
            "user": self.user,
        });

        let response = self
            .client
            .post(format!("{}/chat-messages", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("Failed to reach the chat service")?;

        anyhow::ensure!(
            response.status().is_success(),
            "chat request failed with status {}",
            response.status()
        );

        response
            .json::<ChatReply>()
            .await
            .context("Failed to parse the chat reply")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_parses_the_service_shape() {
        let reply: ChatReply = serde_json::from_str(
            r#"{"answer": "It means to run.", "conversation_id": "c-1", "created_at": 1700000000}"#,
        )
        .unwrap();

        assert_eq!(reply.answer, "It means to run.");
        assert_eq!(reply.conversation_id, "c-1");
    }
}
