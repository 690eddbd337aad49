//! Startup prompts: who is playing.

use crate::console::Console;
use rand::Rng;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use topten_core::{ConfigError, PlayerRegistry, AGENT_NAME_POOL};

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Ask for the human players, then the number of agents.
///
/// Agents are named from [`AGENT_NAME_POOL`] without repeats. Asking for
/// more agents than there are names, or for nobody at all, is fatal.
pub fn read_players<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<PlayerRegistry, SetupError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut registry = PlayerRegistry::new();

    let humans = console.ask_count("Number of human players: ")?;
    for i in 1..=humans {
        let name = console.ask_line(&format!("Name of human player #{i}: "))?;
        let name = name.trim();
        if name.is_empty() {
            registry.add_human(format!("Player {i}"));
        } else {
            registry.add_human(name);
        }
    }

    let agents = console.ask_count(&format!(
        "Number of AI players (at most {}): ",
        AGENT_NAME_POOL.len()
    ))?;
    registry.add_agents(agents, AGENT_NAME_POOL, rng)?;

    if registry.is_empty() {
        return Err(ConfigError::NoPlayers.into());
    }

    let names: Vec<_> = registry.agents().map(|p| p.name().to_string()).collect();
    if !names.is_empty() {
        console.say(&format!("AI players joining: {}", names.join(", ")))?;
    }
    Ok(registry)
}
