use crate::client::{GeminiClient, GeminiError};

/// Generate an English reading passage pitched at a TOEIC score.
///
/// The prompt is kept in Japanese, matching the learner-facing tone of the
/// rest of the product.
pub async fn generate_reading_text(
    client: &GeminiClient,
    toeic_score: u32,
    word_count: u32,
    theme: &str,
) -> Result<String, GeminiError> {
    let prompt = format!(
        "TOEICスコア{toeic_score}の英語力で、{word_count}語程度の英文を生成してください。テーマは「{theme}」です。"
    );

    tracing::debug!(toeic_score, word_count, theme, "requesting reading text");

    client.generate_content(&prompt).await
}
