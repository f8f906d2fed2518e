//! Gemini `generateContent` client
//!
//! One POST per plan, no retries. The request asks for JSON output matching
//! `schema::budget_plan_schema`, and the reply's text parts are joined and
//! coerced through `BudgetPlan::from_json_str`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::prompt::{build_prompt, SYSTEM_INSTRUCTION};
use super::schema::budget_plan_schema;
use super::PlanGenerator;
use crate::config::{ApiKey, Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetMode, BudgetPlan, FinancialData};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest error body kept in `BudgetError::Api`
const MAX_ERROR_BODY: usize = 500;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Client for the Generative Language API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    temperature: f32,
    api_key: ApiKey,
}

impl GeminiClient {
    /// Build a client from settings
    pub fn new(settings: &Settings, api_key: ApiKey) -> BudgetResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("budget-boss/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.request_timeout_secs.max(1)))
            .build()
            .map_err(|e| BudgetError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            api_key,
        })
    }

    /// Point the client at another server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Full URL of the `generateContent` call
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn request_body(&self, data: &FinancialData, mode: BudgetMode) -> GenerateRequest<'static> {
        GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![TextPart {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![TextPart {
                    text: build_prompt(data, mode),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: budget_plan_schema(),
                temperature: self.temperature,
            },
        }
    }
}

#[async_trait]
impl PlanGenerator for GeminiClient {
    async fn generate(&self, data: &FinancialData, mode: BudgetMode) -> BudgetResult<BudgetPlan> {
        info!(model = %self.model, mode = %mode, "requesting budget plan");

        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&self.request_body(data, mode))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "plan request rejected");
            return Err(BudgetError::Api {
                status: status.as_u16(),
                body: truncate(body.trim(), MAX_ERROR_BODY),
            });
        }

        let reply: GenerateResponse = response.json().await.map_err(|e| {
            BudgetError::MalformedResponse(format!("unreadable response envelope: {}", e))
        })?;
        let text = response_text(&reply)?;
        debug!(bytes = text.len(), "plan response received");

        let parsed = BudgetPlan::from_json_str(&text)?;
        for warning in &parsed.warnings {
            warn!(%warning, "repaired plan response");
        }
        info!(
            categories = parsed.plan.budget_breakdown.len(),
            tips = parsed.plan.financial_tips.len(),
            "budget plan generated"
        );
        Ok(parsed.plan)
    }
}

/// Join the text parts of the first candidate
fn response_text(reply: &GenerateResponse) -> BudgetResult<String> {
    if let Some(reason) = reply
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_deref())
    {
        return Err(BudgetError::MalformedResponse(format!(
            "request was blocked ({})",
            reason
        )));
    }

    let Some(candidate) = reply.candidates.first() else {
        return Err(BudgetError::MalformedResponse(
            "response contained no candidates".into(),
        ));
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(BudgetError::MalformedResponse(format!(
            "response contained no text (finish reason: {})",
            reason
        )));
    }
    Ok(text)
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> GeminiClient {
        let settings = Settings::default();
        GeminiClient::new(&settings, ApiKey::new("test-key").unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            client().endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        let local = client().with_base_url("http://127.0.0.1:9999/");
        assert_eq!(
            local.endpoint(),
            "http://127.0.0.1:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let data = FinancialData {
            income: 3000.0,
            expenses: "Rent 1000".into(),
            savings_goal: None,
        };
        let body = serde_json::to_value(client().request_body(&data, BudgetMode::Standard)).unwrap();

        assert!(body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Budget Boss"));
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["temperature"], 0.5);
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let reply: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"summary\":"}, {"text": "\"ok\"}"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(response_text(&reply).unwrap(), "{\"summary\":\"ok\"}");
    }

    #[test]
    fn test_response_text_errors() {
        let empty = GenerateResponse::default();
        assert!(matches!(
            response_text(&empty),
            Err(BudgetError::MalformedResponse(_))
        ));

        let blocked: GenerateResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        let err = response_text(&blocked).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));

        let no_text: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "MAX_TOKENS"}]
        }))
        .unwrap();
        assert!(response_text(&no_text).unwrap_err().to_string().contains("MAX_TOKENS"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
