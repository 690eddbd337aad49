//! Round construction: captain rotation, secret intensities and turn order.

use crate::player::Player;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Errors from building a round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("Cannot start a round without players")]
    NoPlayers,

    #[error("{others} players besides the captain, but only {max} distinct intensities exist")]
    TooManyPlayers { others: usize, max: usize },
}

/// How extreme a suggestion should be, from 1 (mildest) to 10 (wildest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Number of distinct intensities, and so the most entries a round can hold.
    pub const COUNT: usize = (Self::MAX - Self::MIN + 1) as usize;

    /// Returns `None` outside `MIN..=MAX`.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One non-captain player's secret slot for a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub player: Player,
    pub intensity: Intensity,
}

/// A freshly dealt round, before anything has been revealed or collected.
#[derive(Debug, Clone)]
pub struct Round {
    /// Zero-based round number within the session.
    pub index: usize,
    pub captain: Player,
    /// Entries in turn order.
    pub entries: Vec<Entry>,
}

impl Round {
    /// Human-facing round number (1-based).
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn human_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.player.is_human())
    }
}

/// Deals rounds.
pub struct RoundEngine;

impl RoundEngine {
    /// Pick the captain for a round without dealing it.
    pub fn captain_for(players: &[Player], round_index: usize) -> Option<&Player> {
        if players.is_empty() {
            return None;
        }
        players.get(round_index % players.len())
    }

    /// Deal round `round_index` for `players`.
    ///
    /// The captain is `players[round_index % players.len()]`. Everyone else
    /// receives a distinct intensity, and the turn order is shuffled with a
    /// separate draw so that position says nothing about intensity.
    pub fn start_round<R: Rng + ?Sized>(
        players: &[Player],
        round_index: usize,
        rng: &mut R,
    ) -> Result<Round, RoundError> {
        let captain = Self::captain_for(players, round_index)
            .ok_or(RoundError::NoPlayers)?
            .clone();

        let mut others: Vec<Player> = players
            .iter()
            .filter(|p| p.id() != captain.id())
            .cloned()
            .collect();

        if others.len() > Intensity::COUNT {
            return Err(RoundError::TooManyPlayers {
                others: others.len(),
                max: Intensity::COUNT,
            });
        }

        let intensities = draw_intensities(others.len(), rng);
        others.shuffle(rng);

        let entries = others
            .into_iter()
            .zip(intensities)
            .map(|(player, intensity)| Entry { player, intensity })
            .collect();

        Ok(Round {
            index: round_index,
            captain,
            entries,
        })
    }
}

/// Uniformly random ordered sample of `count` distinct intensities.
fn draw_intensities<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Intensity> {
    let mut pool: Vec<Intensity> = (Intensity::MIN..=Intensity::MAX).map(Intensity).collect();
    let (picked, _) = pool.partial_shuffle(rng, count);
    picked.to_vec()
}
