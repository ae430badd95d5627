/// Splits comma separated tag text, trimming each tag and dropping empty ones.
///
/// Returns `None` when no tag is left so the mini's tags are cleared.
pub fn parse_tags(text: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = text
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

/// Tag text for the edit form, the inverse of [`parse_tags`].
pub fn tags_to_text(tags: Option<&[String]>) -> String {
    tags.unwrap_or_default().join(", ")
}
