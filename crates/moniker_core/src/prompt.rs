//! Prompt construction for username generation.

/// Builds the generation prompt for a theme, keyword list, and count.
///
/// The prompt is deterministic: identical inputs yield an identical
/// string. An empty keyword list is rendered as `none specified`. The
/// username constraints (length, charset, tone) are conveyed to the
/// provider here rather than enforced locally.
///
/// # Examples
///
/// ```
/// use moniker_core::username_prompt;
///
/// let prompt = username_prompt("retro gaming", &["pixel".to_string()], 3);
///
/// assert!(prompt.contains("Generate exactly 3 unique"));
/// assert!(prompt.contains("Theme: retro gaming"));
/// assert!(prompt.contains("Keywords to incorporate: pixel"));
/// ```
pub fn username_prompt(theme: &str, keywords: &[String], count: usize) -> String {
    let keywords = if keywords.is_empty() {
        "none specified".to_string()
    } else {
        keywords.join(", ")
    };

    format!(
        "Generate exactly {count} unique, creative Instagram usernames based on:\n\
         \n\
         Theme: {theme}\n\
         Keywords to incorporate: {keywords}\n\
         \n\
         Requirements:\n\
         - Each username must be 4-30 characters\n\
         - Only use letters, numbers, underscores, and periods\n\
         - Make them catchy, memorable, and relevant to the theme\n\
         - Ensure they sound like real Instagram usernames people would want\n\
         - Mix creative wordplay, abbreviations, and stylistic elements\n\
         - Avoid offensive or inappropriate content\n\
         \n\
         Return ONLY the usernames, one per line, no numbering or extra text."
    )
}
