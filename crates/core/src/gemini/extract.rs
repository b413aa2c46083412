use super::types::GenerateContentResponse;
use crate::error::CompletionError;

/// Finish reasons that mean the candidate was withheld.
const REJECTED_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

/// Extract the response text from a `generateContent` response.
///
/// Concatenates the text parts of the first candidate. A blocked prompt or
/// a withheld candidate is a content rejection; a response with no text at
/// all is an empty response.
pub fn extract_text(response: &GenerateContentResponse) -> Result<String, CompletionError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_deref())
    {
        return Err(CompletionError::ContentRejected(format!(
            "prompt blocked ({reason})"
        )));
    }

    let candidate = response
        .candidates
        .first()
        .ok_or(CompletionError::EmptyResponse)?;

    if let Some(reason) = candidate.finish_reason.as_deref() {
        if REJECTED_FINISH_REASONS.contains(&reason) {
            return Err(CompletionError::ContentRejected(format!(
                "response withheld ({reason})"
            )));
        }
    }

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.is_empty() {
        return Err(CompletionError::EmptyResponse);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> GenerateContentResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_extract_single_part() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [{"text": "OK"}]}, "finishReason": "STOP"}]}"#,
        );
        assert_eq!(extract_text(&response).unwrap(), "OK");
    }

    #[test]
    fn test_extract_concatenates_parts_verbatim() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [{"text": "line one\n"}, {"text": "  line two"}]}}]}"#,
        );
        assert_eq!(extract_text(&response).unwrap(), "line one\n  line two");
    }

    #[test]
    fn test_extract_uses_first_candidate_only() {
        let response = parse(
            r#"{"candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]}"#,
        );
        assert_eq!(extract_text(&response).unwrap(), "first");
    }

    #[test]
    fn test_extract_max_tokens_keeps_partial_text() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [{"text": "partial"}]}, "finishReason": "MAX_TOKENS"}]}"#,
        );
        assert_eq!(extract_text(&response).unwrap(), "partial");
    }

    #[test]
    fn test_extract_blocked_prompt() {
        let response = parse(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#);
        assert!(matches!(
            extract_text(&response),
            Err(CompletionError::ContentRejected(reason)) if reason.contains("SAFETY")
        ));
    }

    #[test]
    fn test_extract_withheld_candidate() {
        let response = parse(r#"{"candidates": [{"finishReason": "RECITATION"}]}"#);
        assert!(matches!(
            extract_text(&response),
            Err(CompletionError::ContentRejected(_))
        ));
    }

    #[test]
    fn test_extract_no_candidates() {
        let response = parse("{}");
        assert_eq!(extract_text(&response), Err(CompletionError::EmptyResponse));
    }

    #[test]
    fn test_extract_empty_text() {
        let response = parse(r#"{"candidates": [{"content": {"parts": []}, "finishReason": "STOP"}]}"#);
        assert_eq!(extract_text(&response), Err(CompletionError::EmptyResponse));
    }
}
