//! Players and the session's player registry.

use crate::config::ConfigError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Stable identifier for a player within a session.
///
/// Players are always told apart by id, never by name: two humans may well
/// both be called "Sam".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Who is behind a seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// A person typing at the shared keyboard.
    Human,
    /// A player whose suggestions come from the generation service.
    Agent,
}

/// A player in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    kind: PlayerKind,
}

impl Player {
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered list of players for a session.
///
/// Order is fixed once built; captain rotation depends on it.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a human player and return their id.
    pub fn add_human(&mut self, name: impl Into<String>) -> PlayerId {
        self.push(name.into(), PlayerKind::Human)
    }

    /// Append an agent player with an explicit name.
    pub fn add_agent(&mut self, name: impl Into<String>) -> PlayerId {
        self.push(name.into(), PlayerKind::Agent)
    }

    /// Append `count` agents, naming them by sampling `pool` without replacement.
    pub fn add_agents<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        pool: &[&str],
        rng: &mut R,
    ) -> Result<Vec<PlayerId>, ConfigError> {
        if count > pool.len() {
            return Err(ConfigError::TooManyAgents {
                requested: count,
                available: pool.len(),
            });
        }

        let ids = pool
            .choose_multiple(rng, count)
            .map(|name| self.add_agent(*name))
            .collect();
        Ok(ids)
    }

    fn push(&mut self, name: String, kind: PlayerKind) -> PlayerId {
        let id = PlayerId(self.players.len() as u32);
        self.players.push(Player { id, name, kind });
        id
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn humans(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_human())
    }

    pub fn agents(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_human())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AGENT_NAME_POOL;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut registry = PlayerRegistry::new();
        let alice = registry.add_human("Alice");
        let bot = registry.add_agent("TurboBot");

        assert_eq!(alice.index(), 0);
        assert_eq!(bot.index(), 1);
        assert_eq!(registry.get(bot).unwrap().kind(), PlayerKind::Agent);
        assert_eq!(registry.humans().count(), 1);
        assert_eq!(registry.agents().count(), 1);
    }

    #[test]
    fn test_duplicate_names_are_distinct_players() {
        let mut registry = PlayerRegistry::new();
        let a = registry.add_human("Sam");
        let b = registry.add_human("Sam");

        assert_ne!(a, b);
        assert_ne!(registry.get(a), registry.get(b));
    }

    #[test]
    fn test_add_agents_samples_distinct_names() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut registry = PlayerRegistry::new();
        let ids = registry
            .add_agents(AGENT_NAME_POOL.len(), AGENT_NAME_POOL, &mut rng)
            .unwrap();

        let names: HashSet<_> = ids
            .iter()
            .map(|id| registry.get(*id).unwrap().name().to_string())
            .collect();
        assert_eq!(names.len(), AGENT_NAME_POOL.len());
        assert!(names.iter().all(|n| AGENT_NAME_POOL.contains(&n.as_str())));
    }

    #[test]
    fn test_too_many_agents() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut registry = PlayerRegistry::new();
        let err = registry
            .add_agents(AGENT_NAME_POOL.len() + 1, AGENT_NAME_POOL, &mut rng)
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::TooManyAgents {
                requested: 11,
                available: 10
            }
        ));
        assert!(registry.is_empty());
    }
}
