//! Session configuration and startup errors.

use thiserror::Error;

/// Default names handed out to agent players, sampled without replacement.
pub const AGENT_NAME_POOL: &[&str] = &[
    "TurboBot",
    "FunkyBot",
    "RoboClown",
    "ChattyAI",
    "MisterGiggles",
    "DrLudique",
    "PixelPirate",
    "Echo",
    "Galacto",
    "Zigzag",
];

/// Answers to "play another round?" that keep the session going.
pub const DEFAULT_AFFIRMATIVE: &[&str] = &["y", "yes", "o", "oui"];

/// Errors that prevent a game from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No API key configured - set ANTHROPIC_API_KEY environment variable")]
    MissingCredential,

    #[error("Requested {requested} agents but only {available} agent names are available")]
    TooManyAgents { requested: usize, available: usize },

    #[error("A game needs at least one player")]
    NoPlayers,
}

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Seed for the session's random source. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Whether the captain is asked for a guessed ordering each round.
    pub captain_guess: bool,

    /// Tokens accepted as "yes, play another round".
    pub affirmative: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            captain_guess: true,
            affirmative: DEFAULT_AFFIRMATIVE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SessionConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the random seed so rounds are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable the captain's guess prompt.
    pub fn with_captain_guess(mut self, enabled: bool) -> Self {
        self.captain_guess = enabled;
        self
    }

    /// Replace the set of affirmative answers.
    pub fn with_affirmative<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affirmative = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Whether an answer to the continue prompt means "keep playing".
    pub fn is_affirmative(&self, answer: &str) -> bool {
        let answer = answer.trim();
        self.affirmative
            .iter()
            .any(|token| token.eq_ignore_ascii_case(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_name_pool_is_distinct() {
        let unique: HashSet<_> = AGENT_NAME_POOL.iter().collect();
        assert_eq!(unique.len(), AGENT_NAME_POOL.len());
    }

    #[test]
    fn test_affirmative_answers() {
        let config = SessionConfig::new();
        assert!(config.is_affirmative("y"));
        assert!(config.is_affirmative("  OUI \n"));
        assert!(config.is_affirmative("O"));
        assert!(!config.is_affirmative("n"));
        assert!(!config.is_affirmative(""));
        assert!(!config.is_affirmative("yes please"));
    }

    #[test]
    fn test_custom_affirmative() {
        let config = SessionConfig::new().with_affirmative(["ja"]);
        assert!(config.is_affirmative("JA"));
        assert!(!config.is_affirmative("y"));
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new().with_seed(7).with_captain_guess(false);
        assert_eq!(config.seed, Some(7));
        assert!(!config.captain_guess);
    }
}
