//! Top Ten in the terminal.
//!
//! Players share one screen and keyboard. AI players are backed by Claude,
//! so ANTHROPIC_API_KEY must be set (environment or `.env` file).
//!
//! ```bash
//! cargo run -p topten -- --language French
//! ```

mod console;
mod setup;

use anyhow::{Context, Result};
use clap::Parser;
use console::Console;
use rand::rngs::StdRng;
use rand::SeedableRng;
use setup::SetupError;
use std::io;
use std::time::Duration;
use topten_core::{ClaudeGenerator, GameSession, GeneratorConfig, SessionConfig};
use tracing::info;

/// Top Ten party game with AI players.
#[derive(Debug, Parser)]
#[command(name = "topten", version)]
struct Args {
    /// Do not ask the captain for a guessed ordering.
    #[arg(long)]
    no_guess: bool,

    /// Seed for dealing and naming, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Claude model used by AI players.
    #[arg(long)]
    model: Option<String>,

    /// Language AI players answer in.
    #[arg(long, default_value = "English")]
    language: String,

    /// Seconds before an AI player gives up on a suggestion.
    #[arg(long, default_value_t = 20)]
    timeout_secs: u64,

    /// Attempts per AI suggestion before falling back.
    #[arg(long, default_value_t = 2)]
    attempts: u32,
}

impl Args {
    fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default()
            .with_language(&self.language)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_attempts(self.attempts);
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        config
    }

    /// Claude-backed agents; fails without an API key.
    fn generator(&self) -> Result<ClaudeGenerator> {
        ClaudeGenerator::from_env(self.generator_config())
            .context("put ANTHROPIC_API_KEY in a .env file or export it before starting")
    }

    fn session_config(&self) -> SessionConfig {
        let config = SessionConfig::new().with_captain_guess(!self.no_guess);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let generator = args.generator()?;
    info!(model = %generator.config().model, "AI players ready");

    let mut console = Console::stdio();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };

    let registry = match setup::read_players(&mut console, &mut rng) {
        Ok(registry) => registry,
        Err(SetupError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
        Err(e) => return Err(e).context("player setup failed"),
    };

    let mut session = GameSession::new(args.session_config(), registry, generator, console);
    session.run().await.context("game stopped")?;

    Ok(())
}
