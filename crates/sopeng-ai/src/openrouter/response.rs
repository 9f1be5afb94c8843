//! Inbound reply handling: status classification and completion parsing.

use serde::Deserialize;
use sopeng_common::ErrorMessages;

use crate::{ChatError, TokenUsage};

/// The parts of a successful reply the session keeps.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub content: String,
    pub model: Option<String>,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

/// Map a non-success status to its error kind.
///
/// The body's `error.message` is only consulted for statuses without a
/// dedicated kind; an unreadable body counts as no detail.
pub fn classify_status(status: u16, body: &str, messages: &ErrorMessages) -> ChatError {
    match status {
        401 => ChatError::InvalidCredentials(messages.invalid_credentials.clone()),
        402 => ChatError::QuotaExceeded(messages.quota_exceeded.clone()),
        429 => ChatError::RateLimited {
            message: messages.rate_limited.clone(),
            remote: true,
        },
        s if s >= 500 => ChatError::RemoteService {
            status: s,
            message: messages.remote_service.clone(),
        },
        s => {
            let detail = error_detail(body);
            ChatError::Http {
                status: s,
                message: messages.render_unmapped(s, detail.as_deref()),
                detail,
            }
        }
    }
}

fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty())
}

/// Extract the assistant text from the first choice of a success body.
pub fn parse_completion(body: &str, messages: &ErrorMessages) -> Result<Completion, ChatError> {
    let parsed: CompletionBody =
        serde_json::from_str(body).map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ChatError::EmptyResponse(messages.empty_response.clone()))?;

    Ok(Completion {
        content,
        model: parsed.model,
        usage: parsed.usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn kind_for(status: u16, body: &str) -> ErrorKind {
        classify_status(status, body, &ErrorMessages::default()).kind()
    }

    #[test]
    fn dedicated_statuses_map_to_their_kinds() {
        assert_eq!(kind_for(401, ""), ErrorKind::InvalidCredentials);
        assert_eq!(kind_for(402, ""), ErrorKind::QuotaExceeded);
        assert_eq!(kind_for(429, ""), ErrorKind::RateLimited);
        assert_eq!(kind_for(500, ""), ErrorKind::RemoteService);
        assert_eq!(kind_for(503, ""), ErrorKind::RemoteService);
    }

    #[test]
    fn unmapped_status_carries_server_detail() {
        let err = classify_status(
            400,
            r#"{"error": {"message": "context length exceeded", "code": 400}}"#,
            &ErrorMessages::default(),
        );
        match &err {
            ChatError::Http { status, detail, .. } => {
                assert_eq!(*status, 400);
                assert_eq!(detail.as_deref(), Some("context length exceeded"));
            }
            other => panic!("expected Http, got {other:?}"),
        }
        assert_eq!(err.to_string(), "❌ Error 400: context length exceeded");
    }

    #[test]
    fn malformed_error_body_falls_back_to_unknown() {
        let err = classify_status(404, "<html>not json</html>", &ErrorMessages::default());
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.to_string(), "❌ Error 404: Unknown error");
    }

    #[test]
    fn parses_first_choice_model_and_usage() {
        let body = r#"{
            "id": "gen-1",
            "model": "minimax/minimax-m2",
            "choices": [
                {"message": {"role": "assistant", "content": "Hello"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ],
            "usage": {"prompt_tokens": 9, "completion_tokens": 1, "total_tokens": 10}
        }"#;
        let completion = parse_completion(body, &ErrorMessages::default()).unwrap();
        assert_eq!(completion.content, "Hello");
        assert_eq!(completion.model.as_deref(), Some("minimax/minimax-m2"));
        assert_eq!(completion.usage.map(|u| u.total_tokens), Some(10));
    }

    #[test]
    fn usage_is_optional() {
        let body = r#"{"choices": [{"message": {"content": "ok"}}]}"#;
        let completion = parse_completion(body, &ErrorMessages::default()).unwrap();
        assert!(completion.usage.is_none());
        assert!(completion.model.is_none());
    }

    #[test]
    fn empty_choices_is_empty_response() {
        let err = parse_completion(r#"{"choices": []}"#, &ErrorMessages::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyResponse);
    }

    #[test]
    fn null_or_blank_content_is_empty_response() {
        let messages = ErrorMessages::default();
        for body in [
            r#"{"choices": [{"message": {"content": null}}]}"#,
            r#"{"choices": [{"message": {"content": ""}}]}"#,
            r#"{"choices": [{}]}"#,
            r#"{}"#,
        ] {
            let err = parse_completion(body, &messages).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EmptyResponse, "body: {body}");
        }
    }

    #[test]
    fn non_json_success_body_is_invalid_response() {
        let err = parse_completion("upstream hiccup", &ErrorMessages::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    }
}
