use crate::constants::{PLACEHOLDER_TOPIC, TOPIC_PLACEHOLDER};

/// Substitute `topic` for every `{topic}` marker in `template`.
/// Literal replacement only; braces that are not the marker pass through.
pub fn format_with_topic(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}

/// Trim the raw topic, falling back to [`PLACEHOLDER_TOPIC`] when nothing is left.
pub fn resolve_topic(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        PLACEHOLDER_TOPIC.to_string()
    } else {
        trimmed.to_string()
    }
}
