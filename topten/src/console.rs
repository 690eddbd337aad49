//! Terminal rendering of the shared table.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use topten_core::{Notice, Prompt, Table};

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line, without its line ending.
    ///
    /// End of input is `UnexpectedEof`.
    pub fn ask_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Ask until the answer parses as a non-negative integer.
    pub fn ask_count(&mut self, prompt: &str) -> io::Result<usize> {
        loop {
            let answer = self.ask_line(prompt)?;
            match answer.trim().parse() {
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.output, "{}", "Please enter a whole number.".red())?,
            }
        }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

impl<R: BufRead, W: Write> Table for Console<R, W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.output, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))?;
        self.output.flush()
    }

    fn show(&mut self, notice: Notice) -> io::Result<()> {
        let out = &mut self.output;
        match notice {
            Notice::RoundStarted { number, captain } => {
                writeln!(out)?;
                writeln!(
                    out,
                    "{}",
                    format!("=== Round {number} - Captain: {} ===", captain.name()).bold()
                )?;
            }
            Notice::SecretIntensity { player, intensity } => {
                writeln!(
                    out,
                    "{}, your intensity is {}",
                    player.name(),
                    intensity.to_string().bold().yellow()
                )?;
            }
            Notice::TurnOrder { players } => {
                writeln!(out)?;
                writeln!(out, "{}", "--- Turn order ---".bold())?;
                for (position, player) in players.iter().enumerate() {
                    writeln!(out, "Position {} : {}", position + 1, player.name())?;
                }
            }
            Notice::Theme { theme } => {
                writeln!(out)?;
                writeln!(out, "Theme: {}", theme.as_str().cyan())?;
                writeln!(out, "{}", "--- Suggestions ---".bold())?;
            }
            Notice::AgentSuggestion { player, text } => {
                writeln!(out, "{} suggests: {text}", player.name().magenta())?;
            }
            Notice::CaptainGuess { tokens, .. } => {
                writeln!(out, "Your guess: {}", tokens.join(" "))?;
            }
            Notice::Results { ranking } => {
                writeln!(out)?;
                writeln!(out, "{}", "--- Final suggestions (by intensity) ---".bold())?;
                for r in &ranking {
                    writeln!(out, "{} : {} ({})", r.intensity, r.text, r.player.name())?;
                }
            }
            Notice::CompareWithCaptain { captain } => {
                writeln!(out)?;
                writeln!(out, "{}, compare your order with the real one.", captain.name())?;
            }
            Notice::Farewell { rounds_played } => {
                writeln!(out)?;
                writeln!(out, "Game over after {rounds_played} round(s). Thanks for playing!")?;
            }
        }
        out.flush()
    }

    fn ask(&mut self, prompt: Prompt) -> io::Result<String> {
        let text = match prompt {
            Prompt::Theme { captain } => format!("{}, enter this round's theme: ", captain.name()),
            Prompt::ReadyToReveal { player } => format!(
                "Pass the screen to {}. Press Enter when only you are looking...",
                player.name().bold()
            ),
            Prompt::RevealRecorded { .. } => {
                "Note it down, then press Enter to hide it.".to_string()
            }
            Prompt::Suggestion { player } => {
                format!("{}, your suggestion: ", player.name().green())
            }
            Prompt::CaptainGuess { captain } => format!(
                "{}, enter the intensities in the order you guess (space separated): ",
                captain.name()
            ),
            Prompt::Continue => "\nPlay another round? (y/n): ".to_string(),
        };
        self.ask_line(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topten_core::{Intensity, PlayerRegistry};

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_ask_line_strips_only_line_ending() {
        let mut c = console("  hello  \r\nnext\n");
        assert_eq!(c.ask_line("> ").unwrap(), "  hello  ");
        assert_eq!(c.ask_line("> ").unwrap(), "next");
        assert_eq!(
            c.ask_line("> ").unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut c = console("tail");
        assert_eq!(c.ask_line("").unwrap(), "tail");
    }

    #[test]
    fn test_ask_count_reprompts() {
        let mut c = console("two\n-1\n 3 \n");
        assert_eq!(c.ask_count("How many? ").unwrap(), 3);

        let output = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(output.matches("How many? ").count(), 3);
        assert!(output.contains("whole number"));
    }

    #[test]
    fn test_secret_and_results_render() {
        let mut registry = PlayerRegistry::new();
        let bob = registry.add_human("Bob");
        let bob = registry.get(bob).unwrap().clone();

        let mut c = console("");
        c.show(Notice::SecretIntensity {
            player: bob.clone(),
            intensity: Intensity::new(7).unwrap(),
        })
        .unwrap();
        c.show(Notice::TurnOrder {
            players: vec![bob],
        })
        .unwrap();

        let output = String::from_utf8(c.into_output()).unwrap();
        assert!(output.contains("Bob, your intensity is"));
        assert!(output.contains('7'));
        assert!(output.contains("Position 1 : Bob"));
    }
}
