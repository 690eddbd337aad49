//! Top Ten party game engine with AI players.
//!
//! Each round one player captains. Everyone else secretly receives a
//! distinct intensity from 1 to 10 and, in a shuffled turn order, suggests
//! something on the captain's theme that matches it. The captain then tries
//! to put the suggestions back in order.
//!
//! This crate provides:
//! - Round dealing with independent intensity and turn-order draws
//! - A pass-the-screen reveal that shows one secret at a time
//! - Suggestion collection mixing human input and Claude-backed agents
//! - Ranked presentation with an optional captain guess
//!
//! # Quick Start
//!
//! ```ignore
//! use topten_core::{ClaudeGenerator, GameSession, GeneratorConfig, PlayerRegistry, SessionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = ClaudeGenerator::from_env(GeneratorConfig::default())?;
//!
//!     let mut players = PlayerRegistry::new();
//!     players.add_human("Alice");
//!     players.add_human("Bob");
//!     players.add_agent("TurboBot");
//!
//!     let mut session = GameSession::new(SessionConfig::new(), players, generator, my_table);
//!     session.run().await?;
//!     Ok(())
//! }
//! ```

pub mod collector;
pub mod config;
pub mod generator;
pub mod player;
pub mod present;
pub mod reveal;
pub mod round;
pub mod session;
pub mod table;
pub mod testing;

// Primary public API
pub use collector::{CompletedRound, Suggestion, SuggestionCollector, AGENT_UNAVAILABLE};
pub use config::{ConfigError, SessionConfig, AGENT_NAME_POOL};
pub use generator::{
    ClaudeGenerator, GenerateError, GeneratorConfig, PriorSuggestion, RetryPolicy, Retrying,
    StyleDirective, SuggestionGenerator, SuggestionRequest,
};
pub use player::{Player, PlayerId, PlayerKind, PlayerRegistry};
pub use present::{Presentation, RankedSuggestion, ResultPresenter};
pub use reveal::PrivacyRevealProtocol;
pub use round::{Entry, Intensity, Round, RoundEngine, RoundError};
pub use session::{GameSession, SessionError};
pub use table::{Notice, Prompt, Table};
pub use testing::{FailingGenerator, MockGenerator, ScriptedTable, TableEvent};
