//! End-of-round results.

use crate::collector::CompletedRound;
use crate::player::Player;
use crate::round::Intensity;
use crate::table::{Notice, Prompt, Table};
use std::io;

/// One line of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSuggestion {
    pub intensity: Intensity,
    pub player: Player,
    pub text: String,
}

/// What was shown at the end of a round.
#[derive(Debug, Clone)]
pub struct Presentation {
    /// Mildest first.
    pub ranking: Vec<RankedSuggestion>,
    /// The captain's guess, if it was asked for.
    pub guess: Option<Vec<String>>,
}

/// The round's suggestions, sorted by intensity ascending.
pub fn ranking(round: &CompletedRound) -> Vec<RankedSuggestion> {
    let mut ranked: Vec<RankedSuggestion> = round
        .suggestions
        .iter()
        .map(|s| RankedSuggestion {
            intensity: s.intensity,
            player: s.player.clone(),
            text: s.text.clone(),
        })
        .collect();
    ranked.sort_by_key(|r| r.intensity);
    ranked
}

/// Shows the ranking, optionally after taking the captain's guess.
///
/// The guess is echoed but never scored; the table compares for itself.
#[derive(Debug, Clone, Copy)]
pub struct ResultPresenter {
    captain_guess: bool,
}

impl ResultPresenter {
    pub fn new(captain_guess: bool) -> Self {
        Self { captain_guess }
    }

    pub fn present<T: Table + ?Sized>(
        &self,
        round: &CompletedRound,
        table: &mut T,
    ) -> io::Result<Presentation> {
        // Asked before the results go up, otherwise the answer is on screen.
        let guess = if self.captain_guess {
            let answer = table.ask(Prompt::CaptainGuess {
                captain: round.captain.clone(),
            })?;
            let tokens: Vec<String> = answer.split_whitespace().map(str::to_string).collect();
            table.show(Notice::CaptainGuess {
                captain: round.captain.clone(),
                tokens: tokens.clone(),
            })?;
            Some(tokens)
        } else {
            None
        };

        let ranking = ranking(round);
        table.show(Notice::Results {
            ranking: ranking.clone(),
        })?;
        table.show(Notice::CompareWithCaptain {
            captain: round.captain.clone(),
        })?;

        Ok(Presentation { ranking, guess })
    }
}
