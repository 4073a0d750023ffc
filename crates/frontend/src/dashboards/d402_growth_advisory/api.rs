//! HTTP client for the external text-generation service. Builds the
//! prompt from an [`AdvisorySnapshot`] and maps every failure mode onto
//! [`AdvisoryError`]; no error here ever escapes as a panic.

use contracts::domain::a003_growth_advisory::{build_prompt, AdvisoryError, AdvisorySnapshot};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Request a narrative advisory for the given snapshot. The key is baked
/// in at compile time; without one the call short-circuits before any
/// network traffic.
pub async fn generate_insights(snapshot: &AdvisorySnapshot) -> Result<String, AdvisoryError> {
    let key = option_env!("API_KEY").ok_or(AdvisoryError::MissingApiKey)?;
    let url = format!("{API_BASE}/{MODEL}:generateContent?key={key}");

    let body = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(snapshot),
            }],
        }],
    };

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| AdvisoryError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AdvisoryError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AdvisoryError::Http(response.status()));
    }

    let parsed: GenerateResponse = response
        .json()
        .await
        .map_err(|e| AdvisoryError::Network(e.to_string()))?;

    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AdvisoryError::EmptyResponse);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_extracts_first_candidate_text() {
        let raw = r###"{
            "candidates": [
                {"content": {"parts": [{"text": "## Análise"}, {"text": "ignored"}]}},
                {"content": {"parts": [{"text": "second candidate"}]}}
            ]
        }"###;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text);
        assert_eq!(text.as_deref(), Some("## Análise"));
    }

    #[test]
    fn test_response_without_candidates_defaults_empty() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "prompt".to_string(),
                }],
            }],
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"contents":[{"parts":[{"text":"prompt"}]}]}"#);
    }
}
