//! The shared table: one screen and one keyboard passed between players.
//!
//! The engine never formats text for the players. It emits typed [`Notice`]s
//! and [`Prompt`]s and lets the front end decide wording, language and color.

use crate::player::Player;
use crate::present::RankedSuggestion;
use crate::round::{Entry, Intensity};
use std::io;

/// Something shown on the shared screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// A new round begins (`number` is 1-based).
    RoundStarted { number: usize, captain: Player },
    /// A player's secret intensity. Only ever shown between a ready prompt
    /// and a recorded prompt, on a freshly cleared screen.
    SecretIntensity { player: Player, intensity: Intensity },
    /// Who plays when; intensities are not part of this notice.
    TurnOrder { players: Vec<Player> },
    Theme { theme: String },
    /// An agent's suggestion, shown as soon as it arrives.
    AgentSuggestion { player: Player, text: String },
    /// The captain's guess, echoed back verbatim.
    CaptainGuess { captain: Player, tokens: Vec<String> },
    /// The round's suggestions, mildest first.
    Results { ranking: Vec<RankedSuggestion> },
    /// Invitation for the captain to compare their guess with the results.
    CompareWithCaptain { captain: Player },
    /// The session is over.
    Farewell { rounds_played: usize },
}

/// Something the table waits on.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    Theme { captain: Player },
    /// "Only this player is looking now."
    ReadyToReveal { player: Player },
    /// "I have noted my number."
    RevealRecorded { player: Player },
    Suggestion { player: Player },
    CaptainGuess { captain: Player },
    Continue,
}

/// A display plus input surface shared by everyone in the room.
///
/// All calls block until done; `ask` returns the raw answer line.
pub trait Table {
    /// Wipe everything currently visible.
    fn clear(&mut self) -> io::Result<()>;

    fn show(&mut self, notice: Notice) -> io::Result<()>;

    fn ask(&mut self, prompt: Prompt) -> io::Result<String>;
}

/// Turn order as a plain list of players.
pub fn turn_order(entries: &[Entry]) -> Vec<Player> {
    entries.iter().map(|e| e.player.clone()).collect()
}
