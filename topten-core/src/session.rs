//! GameSession - the round loop.
//!
//! Owns everything that lives longer than a round: the players, the round
//! counter, the random source, the agent generator and the table.

use crate::collector::SuggestionCollector;
use crate::config::SessionConfig;
use crate::generator::SuggestionGenerator;
use crate::player::PlayerRegistry;
use crate::present::{Presentation, ResultPresenter};
use crate::reveal::PrivacyRevealProtocol;
use crate::round::{RoundEngine, RoundError};
use crate::table::{turn_order, Notice, Prompt, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from GameSession operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Round error: {0}")]
    Round(#[from] RoundError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl SessionError {
    /// The players walked away (input closed) rather than something failing.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, SessionError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// A game of Top Ten.
pub struct GameSession<G, T> {
    config: SessionConfig,
    registry: PlayerRegistry,
    generator: G,
    table: T,
    rng: StdRng,
    round_index: usize,
}

impl<G: SuggestionGenerator, T: Table> GameSession<G, T> {
    pub fn new(config: SessionConfig, registry: PlayerRegistry, generator: G, table: T) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            registry,
            generator,
            table,
            rng,
            round_index: 0,
        }
    }

    /// Zero-based index of the next round to be played.
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Play one full round: deal, reveal, collect, present.
    pub async fn play_round(&mut self) -> Result<Presentation, SessionError> {
        let round =
            RoundEngine::start_round(self.registry.players(), self.round_index, &mut self.rng)?;
        debug!(
            round = round.number(),
            captain = %round.captain.id(),
            entries = round.entries.len(),
            "round dealt"
        );

        self.table.show(Notice::RoundStarted {
            number: round.number(),
            captain: round.captain.clone(),
        })?;
        let theme = self.table.ask(Prompt::Theme {
            captain: round.captain.clone(),
        })?;
        let theme = theme.trim().to_string();

        PrivacyRevealProtocol::reveal(&round, &mut self.table)?;

        self.table.show(Notice::TurnOrder {
            players: turn_order(&round.entries),
        })?;
        self.table.show(Notice::Theme {
            theme: theme.clone(),
        })?;

        let completed = SuggestionCollector::new(&self.generator)
            .collect(round, &theme, &mut self.table)
            .await?;

        let presentation =
            ResultPresenter::new(self.config.captain_guess).present(&completed, &mut self.table)?;

        self.round_index += 1;
        Ok(presentation)
    }

    /// Play rounds until the players decline another one.
    ///
    /// Returns how many rounds were played. Closed input ends the session
    /// like a "no" would.
    pub async fn run(&mut self) -> Result<usize, SessionError> {
        info!(players = self.registry.len(), "session started");
        let mut played = 0;

        let result = loop {
            match self.play_round().await {
                Ok(_) => played += 1,
                Err(e) if e.is_end_of_input() => break Ok(played),
                Err(e) => break Err(e),
            }

            match self.table.ask(Prompt::Continue) {
                Ok(answer) if self.config.is_affirmative(&answer) => continue,
                Ok(_) => break Ok(played),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break Ok(played),
                Err(e) => break Err(e.into()),
            }
        };

        if let Ok(rounds_played) = result {
            info!(rounds_played, "session finished");
            self.table.show(Notice::Farewell { rounds_played })?;
        }
        result
    }
}
