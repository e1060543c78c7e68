//! Reshapes raw completion text into the bulleted post returned to callers.

pub const POST_HEADING: &str = "Your social media post:";

/// Splits `raw` on sentence boundaries (`". "` or a newline) and renders one
/// `- ` bullet per sentence, each closed by a single period unless it already
/// ends with `!` or `?`.
pub fn format_bullets(raw: &str) -> String {
    raw.split('\n')
        .flat_map(|line| line.split(". "))
        .map(|sentence| sentence.trim().trim_end_matches('.').trim_end())
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| {
            if sentence.ends_with('!') || sentence.ends_with('?') {
                format!("- {sentence}")
            } else {
                format!("- {sentence}.")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turns a comma separated keyword list into `#tag` words.
///
/// Whitespace inside a keyword is removed, so `"machine learning"` becomes
/// `#machinelearning`.
pub fn format_hashtags(keywords: &str) -> String {
    keywords
        .split(',')
        .map(|keyword| {
            keyword
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
        })
        .map(|keyword| keyword.trim_start_matches('#').to_string())
        .filter(|keyword| !keyword.is_empty())
        .map(|keyword| format!("#{keyword}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text with no sentence to bullet is returned unchanged.
pub fn format_post(raw: &str, keywords: Option<&str>) -> String {
    let bullets = format_bullets(raw);
    if bullets.is_empty() {
        return raw.to_string();
    }
    let mut post = format!("{POST_HEADING}\n\n{bullets}");
    let hashtags = keywords.map(format_hashtags).unwrap_or_default();
    if !hashtags.is_empty() {
        post.push_str("\n\n");
        post.push_str(&hashtags);
    }
    post
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_from_sentences() {
        assert_eq!(
            format_bullets("Use AI. Save time. Grow fast."),
            "- Use AI.\n- Save time.\n- Grow fast."
        );
    }

    #[test]
    fn test_bullets_from_lines() {
        assert_eq!(
            format_bullets("First idea\n\nSecond idea.\n"),
            "- First idea.\n- Second idea."
        );
    }

    #[test]
    fn test_bullets_keep_exclamation() {
        assert_eq!(
            format_bullets("Try it today! It works. Ready?"),
            "- Try it today! It works.\n- Ready?"
        );
    }

    #[test]
    fn test_bullets_ignore_decimal_points() {
        assert_eq!(format_bullets("Version 2.0 ships"), "- Version 2.0 ships.");
    }

    #[test]
    fn test_hashtags_ignore_whitespace() {
        assert_eq!(format_hashtags("ai, tools"), "#ai #tools");
        assert_eq!(format_hashtags("ai,tools"), "#ai #tools");
        assert_eq!(
            format_hashtags(" #growth ,  machine learning,,"),
            "#growth #machinelearning"
        );
    }

    #[test]
    fn test_hashtags_empty() {
        assert_eq!(format_hashtags(""), "");
        assert_eq!(format_hashtags(" , "), "");
    }

    #[test]
    fn test_post_layout() {
        let post = format_post("Use AI. Save time.", Some("ai, tools"));
        assert_eq!(
            post,
            "Your social media post:\n\n- Use AI.\n- Save time.\n\n#ai #tools"
        );
    }

    #[test]
    fn test_post_without_keywords() {
        let post = format_post("Use AI.", None);
        assert_eq!(post, "Your social media post:\n\n- Use AI.");
    }

    #[test]
    fn test_post_without_sentences_is_unchanged() {
        assert_eq!(format_post("...", Some("ai")), "...");
        assert_eq!(format_post(" . ", None), " . ");
    }
}
