//! URL-based passage generation.
//!
//! Runs the workflow in `streaming` mode: the body is a server-sent-event
//! text stream of `data: {json}` lines, and the passage arrives with the
//! `workflow_finished` event.

use anyhow::Context;
use serde_json::json;

use crate::client::DifyClient;

impl DifyClient {
    /// Generate a reading passage from a web page.
    pub async fn generate_text_from_url(
        &self,
        url: &str,
        toeic_level: u32,
        words: u32,
    ) -> anyhow::Result<String> {
        let inputs = json!({
            "url": url,
            "toeic_level": toeic_level,
            "words": words,
        });

        let response = self
            .run_workflow(inputs, "streaming")
            .await
            .context("Failed to reach the workflow service")?;

        anyhow::ensure!(
            response.status().is_success(),
            "workflow request failed with status {}",
            response.status()
        );

        let body = response
            .text()
            .await
            .context("Failed to read the workflow response")?;

        finished_output(&body).context("Workflow finished without producing a passage")
    }
}

/// Scan SSE lines for the `workflow_finished` event's output field.
fn finished_output(body: &str) -> Option<String> {
    for line in body.lines() {
        let Some(data) = line.strip_prefix("data: ") else {
            continue;
        };

        let Ok(event) = serde_json::from_str::<serde_json::Value>(data) else {
            tracing::debug!("skipping unparseable event line");
            continue;
        };

        if event.get("event").and_then(|e| e.as_str()) == Some("workflow_finished")
            && let Some(output) = event
                .pointer("/data/outputs/output")
                .and_then(|o| o.as_str())
        {
            return Some(output.to_string());
        }
    }

    None
}
