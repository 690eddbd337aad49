//! Private, one-at-a-time disclosure of each human's intensity.

use crate::round::Round;
use crate::table::{Notice, Prompt, Table};
use std::io;
use tracing::debug;

/// Passes the shared screen around so each human sees only their own number.
///
/// For every human entry, in turn order: clear, wait for "ready", show the
/// number, wait for "recorded". Agents are skipped. The screen is cleared
/// once more at the end so nothing secret is left on display.
pub struct PrivacyRevealProtocol;

impl PrivacyRevealProtocol {
    pub fn reveal<T: Table + ?Sized>(round: &Round, table: &mut T) -> io::Result<()> {
        for entry in round.human_entries() {
            table.clear()?;
            table.ask(Prompt::ReadyToReveal {
                player: entry.player.clone(),
            })?;
            table.show(Notice::SecretIntensity {
                player: entry.player.clone(),
                intensity: entry.intensity,
            })?;
            table.ask(Prompt::RevealRecorded {
                player: entry.player.clone(),
            })?;
            debug!(player = %entry.player.id(), "intensity revealed");
        }
        table.clear()
    }
}
