use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use super::form::LeadFormData;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub strategic_insights: Vec<String>,
    pub recommended_focus: String,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no Gemini API key was configured at build time")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("no reply within {0} ms")]
    Timeout(u32),
    #[error("reply contained no candidate text")]
    EmptyReply,
    #[error("reply did not match the insight schema: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Anything that can run a `generateContent` call and hand back the raw body.
pub trait GenerativeBackend {
    async fn generate(&self, model: &str, body: &Value) -> Result<String, AnalysisError>;
}

pub struct AnalysisClient<B> {
    backend: B,
    model: String,
}

impl<B: GenerativeBackend> AnalysisClient<B> {
    pub fn new(backend: B, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub async fn analyze(&self, record: &LeadFormData) -> Result<AnalysisResponse, AnalysisError> {
        let body = build_request(record);
        let reply = self.backend.generate(&self.model, &body).await?;
        parse_reply(&reply)
    }
}

pub fn build_prompt(record: &LeadFormData) -> String {
    format!(
        "Analyze the following operational bottlenecks for a fitness business or gym and write a \
professional, calm, strategic insight report with three points.

Business context:
- Name: {name}
- Monthly budget range: {budget}
- Reported bottlenecks: {bottlenecks}

Instructions:
- No hype.
- Be intelligent and strategic.
- Suggest how custom AI and automation (not specific software products) could solve these.
- Keep it brief: three clear points.",
        name = record.full_name,
        budget = record.budget,
        bottlenecks = record.bottlenecks,
    )
}

pub fn build_request(record: &LeadFormData) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": build_prompt(record) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "strategicInsights": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "Three high-level strategic observations."
                    },
                    "recommendedFocus": {
                        "type": "STRING",
                        "description": "A single sentence recommending the primary area of infrastructure focus."
                    }
                },
                "required": ["strategicInsights", "recommendedFocus"]
            }
        }
    })
}

#[derive(Deserialize)]
struct GenerateContentReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Unwraps the Gemini envelope and parses the model's JSON text.
pub fn parse_reply(body: &str) -> Result<AnalysisResponse, AnalysisError> {
    let reply: GenerateContentReply = serde_json::from_str(body)?;
    let text: String = reply
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyReply);
    }
    Ok(serde_json::from_str(&text)?)
}
