//! Topic Validation
//!
//! Research topics entered by the user pass through this check
//! before being handed to an agent. Rejects injection-shaped input
//! and normalizes whitespace.

use regex::Regex;

use crate::error::AgentLabError;
use crate::retry::ensure_not_empty;

pub const MIN_TOPIC_LENGTH: usize = 3;
pub const MAX_TOPIC_LENGTH: usize = 500;

/// Characters that are never valid in a topic.
const INVALID_CHARS_PATTERN: &str = r"[<>{}]";

/// Injection-shaped content: markup, script protocols, SQL verbs.
const SUSPICIOUS_PATTERNS: [&str; 7] = [
    r"(?i)<script[^>]*>",
    r"(?i)javascript:",
    r"(?i)on\w+\s*=",
    r"(?i)(--|;)\s*DROP",
    r"(?i)(--|;)\s*DELETE",
    r"(?i)(--|;)\s*INSERT",
    r"(?i)(--|;)\s*UPDATE",
];

/// Validate and normalize a research topic.
///
/// Returns the topic with internal whitespace runs collapsed to
/// single spaces, or a validation error naming the first failed
/// check.
pub fn validate_topic(topic: &str) -> Result<String, AgentLabError> {
    let topic = ensure_not_empty(topic, "topic")?;

    let length = topic.chars().count();
    if length < MIN_TOPIC_LENGTH {
        return Err(AgentLabError::Validation(format!(
            "topic too short (minimum {} characters)",
            MIN_TOPIC_LENGTH
        )));
    }
    if length > MAX_TOPIC_LENGTH {
        return Err(AgentLabError::Validation(format!(
            "topic too long (maximum {} characters)",
            MAX_TOPIC_LENGTH
        )));
    }

    let invalid_chars = Regex::new(INVALID_CHARS_PATTERN)
        .map(|re| re.is_match(topic))
        .unwrap_or(false);
    if invalid_chars {
        return Err(AgentLabError::Validation(
            "topic contains forbidden characters: < > { }".to_string(),
        ));
    }

    let suspicious = SUSPICIOUS_PATTERNS.iter().any(|p| {
        Regex::new(p)
            .map(|re| re.is_match(topic))
            .unwrap_or(false)
    });
    if suspicious {
        return Err(AgentLabError::Validation(
            "topic contains suspicious content".to_string(),
        ));
    }

    Ok(topic.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_topic_passes() {
        let result = validate_topic("history of neural networks").unwrap();
        assert_eq!(result, "history of neural networks");
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let result = validate_topic("  quantum   computing \n basics  ").unwrap();
        assert_eq!(result, "quantum computing basics");
    }

    #[test]
    fn test_empty_topic_is_rejected() {
        assert!(validate_topic("   ").is_err());
    }

    #[test]
    fn test_too_short_topic_is_rejected() {
        assert!(validate_topic("ab").is_err());
    }

    #[test]
    fn test_too_long_topic_is_rejected() {
        let long = "a".repeat(MAX_TOPIC_LENGTH + 1);
        assert!(validate_topic(&long).is_err());
    }

    #[test]
    fn test_forbidden_characters_are_rejected() {
        assert!(validate_topic("topic with {braces}").is_err());
        assert!(validate_topic("a <b> c").is_err());
    }

    #[test]
    fn test_script_tag_is_rejected() {
        assert!(validate_topic("see <script src=x></script>").is_err());
    }

    #[test]
    fn test_javascript_protocol_is_rejected() {
        assert!(validate_topic("run javascript: alert(1)").is_err());
    }

    #[test]
    fn test_event_handler_is_rejected() {
        assert!(validate_topic("img onerror= payload").is_err());
    }

    #[test]
    fn test_sql_verbs_are_rejected() {
        assert!(validate_topic("users; DROP tables please").is_err());
        assert!(validate_topic("notes -- DELETE everything").is_err());
    }
}
