//! Gemini-backed tutor client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::config::TutorConfig;

use super::{Quiz, Tutor, TUTOR_KEY_MISSING, TUTOR_UNAVAILABLE};

const SYSTEM_INSTRUCTION: &str =
    "Always prioritize safety warnings when discussing high voltage operations.";

pub struct GeminiTutor {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiTutor {
    pub fn new(cfg: &TutorConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(cfg.http_timeout_seconds))
                .build()
                .unwrap_or_default(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// POST a generateContent request and pull the first candidate's text.
    async fn generate(&self, body: serde_json::Value) -> Option<String> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| warn!(error = %e, "tutor request failed"))
            .ok()?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "tutor endpoint returned error");
            return None;
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| warn!(error = %e, "malformed tutor response"))
            .ok()?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
    }
}

#[async_trait]
impl Tutor for GeminiTutor {
    async fn ask(&self, question: &str, context: &str) -> String {
        if self.api_key.is_empty() {
            return TUTOR_KEY_MISSING.to_string();
        }

        let prompt = format!(
            "Role: You are an expert Electrical Engineering Professor \
             specializing in Critical Power Systems and UPS (Uninterruptible \
             Power Supply).\n\nContext: The student is currently studying: \
             {context}.\n\nTask: Answer the student's question clearly, \
             accurately, and concisely. Use analogies where appropriate. Focus \
             on safety and technical correctness.\n\nQuestion: {question}"
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "generationConfig": { "temperature": 0.3 },
        });

        match self.generate(body).await {
            Some(text) => text,
            None => TUTOR_UNAVAILABLE.to_string(),
        }
    }

    async fn generate_quiz(&self, context: &str) -> Option<Quiz> {
        if self.api_key.is_empty() {
            debug!("quiz skipped: no API key configured");
            return None;
        }

        let prompt = format!(
            "Generate a single multiple-choice question about: {context}. \
             Return strictly JSON format."
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 0.3,
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "correctIndex": { "type": "INTEGER" },
                        "explanation": { "type": "STRING" }
                    }
                }
            },
        });

        let text = self.generate(body).await?;
        let quiz: QuizPayload = serde_json::from_str(&text)
            .map_err(|e| warn!(error = %e, "quiz JSON did not parse"))
            .ok()?;

        if quiz.options.is_empty() || quiz.correct_index >= quiz.options.len() {
            warn!("quiz payload inconsistent, dropping");
            return None;
        }

        Some(Quiz {
            question: quiz.question,
            options: quiz.options,
            correct_index: quiz.correct_index,
            explanation: quiz.explanation,
        })
    }
}

/// Wire shape of the model's quiz JSON (camelCase per the response schema).
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizPayload {
    question: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tutor_for(server: &MockServer, api_key: &str) -> GeminiTutor {
        GeminiTutor::new(&TutorConfig {
            base_url: server.uri(),
            api_key: api_key.to_string(),
            model: "gemini-2.5-flash".to_string(),
            http_timeout_seconds: 5,
        })
    }

    fn text_response(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
    }

    #[tokio::test]
    async fn ask_returns_model_answer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex(r":generateContent$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response(
                "The inverter keeps running from the battery, so the break is 0 ms.",
            )))
            .mount(&server)
            .await;

        let answer = tutor_for(&server, "test-key")
            .ask("Why is the transfer 0 ms?", "Lesson: Battery Operation.")
            .await;
        assert!(answer.contains("0 ms"));
    }

    #[tokio::test]
    async fn server_error_becomes_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let answer = tutor_for(&server, "test-key").ask("q", "ctx").await;
        assert_eq!(answer, TUTOR_UNAVAILABLE);
    }

    #[tokio::test]
    async fn missing_key_short_circuits() {
        let server = MockServer::start().await;
        let tutor = tutor_for(&server, "");

        assert_eq!(tutor.ask("q", "ctx").await, TUTOR_KEY_MISSING);
        assert_eq!(tutor.generate_quiz("ctx").await, None);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn quiz_parses_model_json() {
        let server = MockServer::start().await;
        let quiz_json = json!({
            "question": "Which breaker is the maintenance bypass?",
            "options": ["Q1", "Q2", "Q3", "Q4"],
            "correctIndex": 2,
            "explanation": "Q3 wraps mains around the whole chassis."
        });
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(text_response(&quiz_json.to_string())),
            )
            .mount(&server)
            .await;

        let quiz = tutor_for(&server, "test-key")
            .generate_quiz("maintenance bypass")
            .await
            .expect("quiz");
        assert_eq!(quiz.correct_index, 2);
        assert_eq!(quiz.options.len(), 4);
    }

    #[tokio::test]
    async fn malformed_quiz_json_becomes_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("not json")))
            .mount(&server)
            .await;

        assert_eq!(
            tutor_for(&server, "test-key").generate_quiz("ctx").await,
            None
        );
    }

    #[tokio::test]
    async fn out_of_range_answer_index_is_rejected() {
        let server = MockServer::start().await;
        let bad = json!({
            "question": "q",
            "options": ["a"],
            "correctIndex": 5,
            "explanation": "e"
        });
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(text_response(&bad.to_string())),
            )
            .mount(&server)
            .await;

        assert_eq!(
            tutor_for(&server, "test-key").generate_quiz("ctx").await,
            None
        );
    }
}
