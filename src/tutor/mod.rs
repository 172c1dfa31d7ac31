//! Tutor capability.
//!
//! The hosted language model is an external collaborator consumed behind a
//! trait. Implementations convert every failure into a benign sentinel: a
//! user-facing fallback string for answers, `None` for quizzes. A broken tutor
//! must never block the visualization.

pub mod gemini;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use gemini::GeminiTutor;

/// Sentinel answer when the model cannot be reached or returns garbage.
pub const TUTOR_UNAVAILABLE: &str =
    "The AI tutor is unreachable right now. Please check your connection and try again.";

/// Sentinel answer when no API credential is configured.
pub const TUTOR_KEY_MISSING: &str =
    "The AI tutor is not configured: API key missing.";

/// One generated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

#[async_trait]
pub trait Tutor: Send + Sync {
    /// Answer a free-text question against the given lesson context. Never
    /// errors; failures come back as a sentinel string.
    async fn ask(&self, question: &str, context: &str) -> String;

    /// Generate a quiz for the given context. `None` means "no quiz available
    /// right now" for any reason: network, credential, malformed response.
    async fn generate_quiz(&self, context: &str) -> Option<Quiz>;
}
