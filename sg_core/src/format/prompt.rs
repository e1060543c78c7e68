use crate::server::payload::generate_text_request::GenerateTextRequest;

const DEFAULT_LENGTH: &str = "short";
const DEFAULT_TONE: &str = "engaging";
const DEFAULT_PLATFORM: &str = "social media";

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

/// Builds the completion prompt for a text request.
///
/// The free-text fields are embedded positionally, without escaping. With no
/// optional fields the prompt reads
/// `Write a short, engaging social media post about: <topic>`.
pub fn build_text_prompt(req: &GenerateTextRequest) -> String {
    let length = or_default(&req.length, DEFAULT_LENGTH);
    let tone = or_default(&req.tone, DEFAULT_TONE);
    let platform = or_default(&req.platform, DEFAULT_PLATFORM);
    let mut prompt = format!(
        "Write a {length}, {tone} {platform} post about: {}",
        req.topic.trim()
    );
    if let Some(keywords) = req
        .keywords
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
    {
        prompt.push_str(&format!(" Include these keywords: {keywords}."));
    }
    prompt
}

/// Prompt sent to the image model.
pub fn build_image_prompt(prompt: &str) -> String {
    format!("Generate an image of: {prompt}")
}
