//! Pulls the useful part out of each provider's response envelope.

use serde_json::Value;

/// Returned as `text` when no completion can be extracted.
pub const NO_RESPONSE: &str = "No response";

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}

/// Nova text models answer with `output.message.content[*].text`; the parts
/// are joined with a space.
pub fn extract_nova_text(result: &Value) -> Option<String> {
    let parts = result
        .pointer("/output/message/content")?
        .as_array()?
        .iter()
        .filter_map(|content| content.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>();
    non_blank(parts.join(" "))
}

/// OpenAI-compatible servers answer with `choices[0].message.content`, or
/// `choices[0].text` for the legacy completion shape.
pub fn extract_chat_text(result: &Value) -> Option<String> {
    let choice = result.get("choices")?.as_array()?.first()?;
    let text = choice
        .pointer("/message/content")
        .and_then(Value::as_str)
        .or_else(|| choice.get("text").and_then(Value::as_str))?;
    non_blank(text.to_string())
}

/// Model identifiers of an OpenAI-compatible `/models` listing, in order.
pub fn extract_model_ids(result: &Value) -> Vec<String> {
    result
        .get("data")
        .and_then(Value::as_array)
        .map(|models| {
            models
                .iter()
                .filter_map(|model| model.get("id").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// First base64 image of a Nova Canvas response.
pub fn extract_first_image(result: &Value) -> Option<String> {
    result
        .get("images")?
        .as_array()?
        .first()?
        .as_str()
        .filter(|image| !image.is_empty())
        .map(str::to_string)
}

pub fn text_or_placeholder(text: Option<String>) -> String {
    text.unwrap_or_else(|| NO_RESPONSE.to_string())
}
