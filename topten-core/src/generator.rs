//! Suggestion generation for agent players.
//!
//! The collector only sees the [`SuggestionGenerator`] trait. The production
//! implementation, [`ClaudeGenerator`], asks Claude for a one-line answer
//! with a bounded timeout and a small number of retries.

use crate::config::ConfigError;
use crate::round::Intensity;
use async_trait::async_trait;
use claude::{Claude, Message, Request};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Mean prior length (in characters) below which agents are told to stay terse.
pub const TERSE_THRESHOLD: f64 = 30.0;

/// Default model for agent players (fast and cheap).
const AGENT_MODEL: &str = "claude-3-5-haiku-20241022";

/// Errors from the generation service.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Claude API error: {0}")]
    Api(#[from] claude::Error),

    #[error("Generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Generation returned no text")]
    Empty,
}

/// How wordy an agent's suggestion should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleDirective {
    Terse,
    Detailed,
}

impl StyleDirective {
    /// Match the table's register: terse while earlier answers average under
    /// [`TERSE_THRESHOLD`] characters, detailed once they run longer.
    ///
    /// With nothing said yet, terse.
    pub fn from_history(prior: &[PriorSuggestion]) -> Self {
        if prior.is_empty() {
            return StyleDirective::Terse;
        }

        let total: usize = prior.iter().map(|p| p.text.chars().count()).sum();
        let mean = total as f64 / prior.len() as f64;

        if mean < TERSE_THRESHOLD {
            StyleDirective::Terse
        } else {
            StyleDirective::Detailed
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            StyleDirective::Terse => "Keep it short and direct.",
            StyleDirective::Detailed => "Add a little more detail and color.",
        }
    }
}

/// A suggestion already made this round, in turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorSuggestion {
    pub intensity: Intensity,
    pub text: String,
}

/// Everything an agent is allowed to know when it plays.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub theme: String,
    pub intensity: Intensity,
    /// Only suggestions made strictly earlier in the turn order.
    pub prior: Vec<PriorSuggestion>,
    pub style: StyleDirective,
}

/// Source of agent suggestions.
#[async_trait]
pub trait SuggestionGenerator: Send + Sync {
    async fn generate(&self, request: &SuggestionRequest) -> Result<String, GenerateError>;
}

/// Configuration for [`ClaudeGenerator`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub model: String,

    /// Token budget per suggestion; answers are meant to be under a sentence.
    pub max_tokens: usize,

    pub temperature: f32,

    /// Language agents answer in.
    pub language: String,

    /// Limit on a single attempt.
    pub timeout: Duration,

    /// Total attempts per suggestion, including the first.
    pub max_attempts: u32,

    /// Wait before retry `n` is `retry_backoff * n`.
    pub retry_backoff: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: AGENT_MODEL.to_string(),
            max_tokens: 80,
            temperature: 0.8,
            language: "English".to_string(),
            timeout: Duration::from_secs(20),
            max_attempts: 2,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

impl GeneratorConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }
}

/// Per-attempt timeout and retry schedule for a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub timeout: Duration,

    /// Total attempts, including the first. Never less than one.
    pub max_attempts: u32,

    /// Wait before retry `n` is `backoff * n`.
    pub backoff: Duration,
}

impl GeneratorConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            timeout: self.timeout,
            max_attempts: self.max_attempts.max(1),
            backoff: self.retry_backoff,
        }
    }
}

/// Wraps a generator with a timeout on every attempt and bounded retries.
///
/// Replies are trimmed; a blank reply counts as a failed attempt
/// ([`GenerateError::Empty`]).
pub struct Retrying<G> {
    inner: G,
    policy: RetryPolicy,
}

impl<G: SuggestionGenerator> Retrying<G> {
    pub fn new(inner: G, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    async fn attempt(&self, request: &SuggestionRequest) -> Result<String, GenerateError> {
        let text = tokio::time::timeout(self.policy.timeout, self.inner.generate(request))
            .await
            .map_err(|_| GenerateError::Timeout(self.policy.timeout))??;

        let text = text.trim();
        if text.is_empty() {
            return Err(GenerateError::Empty);
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl<G: SuggestionGenerator> SuggestionGenerator for Retrying<G> {
    async fn generate(&self, request: &SuggestionRequest) -> Result<String, GenerateError> {
        let mut attempt = 1;

        loop {
            match self.attempt(request).await {
                Ok(text) => return Ok(text),
                Err(e) if attempt < self.policy.max_attempts => {
                    debug!(attempt, error = %e, "suggestion attempt failed, retrying");
                    tokio::time::sleep(self.policy.backoff * attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// One Claude call per suggestion, no retries.
struct ClaudeCompletion {
    client: Claude,
    config: GeneratorConfig,
}

#[async_trait]
impl SuggestionGenerator for ClaudeCompletion {
    async fn generate(&self, request: &SuggestionRequest) -> Result<String, GenerateError> {
        let response = self
            .client
            .complete(build_request(&self.config, request))
            .await?;
        Ok(response.text().to_string())
    }
}

/// Agent player backed by Claude.
pub struct ClaudeGenerator {
    inner: Retrying<ClaudeCompletion>,
}

impl ClaudeGenerator {
    pub fn new(client: Claude, config: GeneratorConfig) -> Self {
        let client = client.with_timeout(config.timeout);
        let policy = config.retry_policy();
        Self {
            inner: Retrying::new(ClaudeCompletion { client, config }, policy),
        }
    }

    /// Create from environment (ANTHROPIC_API_KEY).
    pub fn from_env(config: GeneratorConfig) -> Result<Self, ConfigError> {
        let client = Claude::from_env().map_err(|_| ConfigError::MissingCredential)?;
        Ok(Self::new(client, config))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.inner.inner().config
    }
}

#[async_trait]
impl SuggestionGenerator for ClaudeGenerator {
    async fn generate(&self, request: &SuggestionRequest) -> Result<String, GenerateError> {
        self.inner.generate(request).await
    }
}

fn build_request(config: &GeneratorConfig, request: &SuggestionRequest) -> Request {
    Request::new(vec![Message::user(user_prompt(request))])
        .with_model(&config.model)
        .with_system(system_prompt(request.style, &config.language))
        .with_max_tokens(config.max_tokens)
        .with_temperature(config.temperature)
}

fn system_prompt(style: StyleDirective, language: &str) -> String {
    format!(
        "You are a playful player in the party game Top Ten. \
         Players propose answers to a theme, each with a secret intensity from \
         1 (mildest) to 10 (wildest), and the captain tries to rank them. \
         Give one fun, imaginative answer that matches your intensity. \
         {} Reply with the answer only, in {language}.",
        style.instruction()
    )
}

fn user_prompt(request: &SuggestionRequest) -> String {
    let prior = if request.prior.is_empty() {
        "(none yet)".to_string()
    } else {
        request
            .prior
            .iter()
            .map(|p| format!("{} : {}", p.intensity, p.text))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "Theme: {}\nYour intensity (1-10): {}\nPrevious answers:\n{prior}",
        request.theme, request.intensity
    )
}
