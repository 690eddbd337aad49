//! End-to-end round tests with scripted players and a mock agent service.
//!
//! No API key needed; everything runs against `ScriptedTable` and
//! `MockGenerator` / `FailingGenerator`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use topten_core::{
    FailingGenerator, GameSession, MockGenerator, Notice, PlayerRegistry, PrivacyRevealProtocol,
    ResultPresenter, RoundEngine, ScriptedTable, SessionConfig, StyleDirective,
    SuggestionCollector, TableEvent, AGENT_NAME_POOL, AGENT_UNAVAILABLE,
};

fn alice_bob_and_bot() -> PlayerRegistry {
    let mut registry = PlayerRegistry::new();
    registry.add_human("Alice");
    registry.add_human("Bob");
    registry.add_agent("TurboBot");
    registry
}

// =============================================================================
// COMPONENT PIPELINE
// =============================================================================

#[tokio::test]
async fn test_two_humans_one_agent_first_round() {
    for seed in 0..20 {
        let registry = alice_bob_and_bot();
        let mut rng = StdRng::seed_from_u64(seed);

        let round = RoundEngine::start_round(registry.players(), 0, &mut rng).unwrap();
        assert_eq!(round.captain.name(), "Alice");
        let mut names: Vec<_> = round.entries.iter().map(|e| e.player.name()).collect();
        names.sort();
        assert_eq!(names, ["Bob", "TurboBot"]);

        let agent_first = !round.entries[0].player.is_human();
        let agent_intensity = round
            .entries
            .iter()
            .find(|e| !e.player.is_human())
            .unwrap()
            .intensity;

        let mut table = ScriptedTable::new(["", "", "a bike"]);
        PrivacyRevealProtocol::reveal(&round, &mut table).unwrap();
        assert_eq!(table.secrets_shown().count(), 1);

        let generator = MockGenerator::new(["a rocket"]);
        let completed = SuggestionCollector::new(&generator)
            .collect(round, "Ways to get to work", &mut table)
            .await
            .unwrap();

        let requests = generator.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].intensity, agent_intensity);
        if agent_first {
            assert!(requests[0].prior.is_empty());
            assert_eq!(requests[0].style, StyleDirective::Terse);
        } else {
            assert_eq!(requests[0].prior.len(), 1);
            assert_eq!(requests[0].prior[0].text, "a bike");
        }

        let presentation = ResultPresenter::new(false)
            .present(&completed, &mut table)
            .unwrap();
        assert_eq!(presentation.ranking.len(), 2);
        assert!(presentation.ranking[0].intensity < presentation.ranking[1].intensity);
        assert_eq!(table.remaining_answers(), 0);
    }
}

#[tokio::test]
async fn test_failing_agents_still_complete_round() {
    let mut registry = PlayerRegistry::new();
    registry.add_human("Alice");
    registry.add_human("Bob");
    let mut rng = StdRng::seed_from_u64(12);
    registry.add_agents(8, AGENT_NAME_POOL, &mut rng).unwrap();

    let round = RoundEngine::start_round(registry.players(), 1, &mut rng).unwrap();
    assert_eq!(round.captain.name(), "Bob");
    assert_eq!(round.entries.len(), 9);

    let mut table = ScriptedTable::new(["", "", "something mild"]);
    PrivacyRevealProtocol::reveal(&round, &mut table).unwrap();
    let completed = SuggestionCollector::new(&FailingGenerator)
        .collect(round, "Holidays", &mut table)
        .await
        .unwrap();

    let sentinels = completed
        .suggestions
        .iter()
        .filter(|s| s.text == AGENT_UNAVAILABLE)
        .count();
    assert_eq!(sentinels, 8);

    let presentation = ResultPresenter::new(false)
        .present(&completed, &mut table)
        .unwrap();
    assert_eq!(presentation.ranking.len(), 9);
    assert!(presentation
        .ranking
        .windows(2)
        .all(|w| w[0].intensity < w[1].intensity));
}

// =============================================================================
// SESSION
// =============================================================================

#[tokio::test]
async fn test_session_with_failing_service_plays_on() {
    let config = SessionConfig::new().with_seed(5).with_captain_guess(true);
    let mut answers = vec!["Pets", "", "", "a hamster", "2 1", "oui"];
    answers.extend(["Cars", "", "", "a bus", "", "non"]);
    let table = ScriptedTable::new(answers);
    let mut session = GameSession::new(config, alice_bob_and_bot(), FailingGenerator, table);

    assert_eq!(session.run().await.unwrap(), 2);

    let results: Vec<_> = session
        .table()
        .notices()
        .filter_map(|n| match n {
            Notice::Results { ranking } => Some(ranking.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(results.len(), 2);
    for ranking in &results {
        assert_eq!(ranking.len(), 2);
        assert!(ranking.iter().any(|r| r.text == AGENT_UNAVAILABLE));
    }

    let guesses: Vec<_> = session
        .table()
        .notices()
        .filter_map(|n| match n {
            Notice::CaptainGuess { tokens, .. } => Some(tokens.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(guesses, [vec!["2".to_string(), "1".to_string()], Vec::new()]);
}

#[tokio::test]
async fn test_same_seed_same_deal() {
    let deal = |seed: u64| async move {
        let config = SessionConfig::new().with_seed(seed).with_captain_guess(false);
        let table = ScriptedTable::new(["Pets", "", "", "a cat", "n"]);
        let generator = MockGenerator::new(["x"]);
        let mut session = GameSession::new(config, alice_bob_and_bot(), generator, table);
        session.run().await.unwrap();
        session.table().events().to_vec()
    };

    assert_eq!(deal(77).await, deal(77).await);
}

#[tokio::test]
async fn test_secrets_always_cleared_before_anything_else() {
    let mut registry = PlayerRegistry::new();
    for name in ["Ann", "Ben", "Cid", "Dee"] {
        registry.add_human(name);
    }
    registry.add_agent("TurboBot");

    let config = SessionConfig::new().with_seed(31).with_captain_guess(false);
    // Theme, two acks for each of the three humans, their suggestions, stop.
    let mut answers = vec!["Fears", "", "", "", "", "", ""];
    answers.extend(["spiders", "clowns", "taxes", "n"]);
    let table = ScriptedTable::new(answers);
    let generator = MockGenerator::new(["the dark"]);
    let mut session = GameSession::new(config, registry, generator, table);
    session.run().await.unwrap();

    // After a secret, the next non-prompt event must be a clear.
    let events = session.table().events();
    for (i, event) in events.iter().enumerate() {
        if matches!(event, TableEvent::Show(Notice::SecretIntensity { .. })) {
            let next = events[i + 1..]
                .iter()
                .find(|e| !matches!(e, TableEvent::Ask(_)))
                .unwrap();
            assert_eq!(next, &TableEvent::Clear);
        }
    }
}
