//! Turn-ordered suggestion gathering.

use crate::generator::{PriorSuggestion, StyleDirective, SuggestionGenerator, SuggestionRequest};
use crate::player::Player;
use crate::round::{Intensity, Round};
use crate::table::{Notice, Prompt, Table};
use std::io;
use tracing::{debug, warn};

/// Stand-in text when an agent's suggestion could not be generated.
pub const AGENT_UNAVAILABLE: &str = "agent unavailable";

/// An entry whose suggestion has been collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub player: Player,
    pub intensity: Intensity,
    pub text: String,
}

/// A round with every suggestion in. Only these can be presented.
#[derive(Debug, Clone)]
pub struct CompletedRound {
    pub index: usize,
    pub captain: Player,
    pub theme: String,
    /// Suggestions in turn order.
    pub suggestions: Vec<Suggestion>,
}

impl CompletedRound {
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Collects one suggestion per entry, strictly in turn order.
///
/// Humans type at the table. Agents get the theme, their intensity and
/// everything said before them this round, never anything said after.
pub struct SuggestionCollector<'a, G: SuggestionGenerator + ?Sized> {
    generator: &'a G,
}

impl<'a, G: SuggestionGenerator + ?Sized> SuggestionCollector<'a, G> {
    pub fn new(generator: &'a G) -> Self {
        Self { generator }
    }

    pub async fn collect<T: Table + ?Sized>(
        &self,
        round: Round,
        theme: &str,
        table: &mut T,
    ) -> io::Result<CompletedRound> {
        let mut suggestions: Vec<Suggestion> = Vec::with_capacity(round.entries.len());

        for entry in round.entries {
            let text = if entry.player.is_human() {
                table.ask(Prompt::Suggestion {
                    player: entry.player.clone(),
                })?
            } else {
                let prior = suggestions
                    .iter()
                    .map(|s| PriorSuggestion {
                        intensity: s.intensity,
                        text: s.text.clone(),
                    })
                    .collect::<Vec<_>>();
                let request = SuggestionRequest {
                    theme: theme.to_string(),
                    intensity: entry.intensity,
                    style: StyleDirective::from_history(&prior),
                    prior,
                };

                let text = self.agent_suggestion(&entry.player, &request).await;
                table.show(Notice::AgentSuggestion {
                    player: entry.player.clone(),
                    text: text.clone(),
                })?;
                text
            };

            suggestions.push(Suggestion {
                player: entry.player,
                intensity: entry.intensity,
                text,
            });
        }

        Ok(CompletedRound {
            index: round.index,
            captain: round.captain,
            theme: theme.to_string(),
            suggestions,
        })
    }

    async fn agent_suggestion(&self, player: &Player, request: &SuggestionRequest) -> String {
        debug!(
            player = %player.id(),
            prior = request.prior.len(),
            style = ?request.style,
            "requesting agent suggestion"
        );
        match self.generator.generate(request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(player = %player.name(), error = %e, "agent suggestion failed");
                AGENT_UNAVAILABLE.to_string()
            }
        }
    }
}
