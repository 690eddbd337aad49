//! Testing utilities for the game.
//!
//! This module provides stand-ins for the two outside collaborators:
//! - `MockGenerator` / `FailingGenerator` instead of the Claude API
//! - `ScriptedTable` instead of a terminal, recording everything shown

use crate::generator::{GenerateError, SuggestionGenerator, SuggestionRequest};
use crate::player::Player;
use crate::round::Intensity;
use crate::table::{Notice, Prompt, Table};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

/// A generator that returns scripted suggestions in order.
///
/// Every request it receives is kept for later inspection. Once the script
/// runs out it fails, which the collector turns into a sentinel.
pub struct MockGenerator {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<SuggestionRequest>>,
}

impl MockGenerator {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<SuggestionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SuggestionGenerator for MockGenerator {
    async fn generate(&self, request: &SuggestionRequest) -> Result<String, GenerateError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .ok_or(GenerateError::Empty)
    }
}

/// A generator whose every call fails.
pub struct FailingGenerator;

#[async_trait]
impl SuggestionGenerator for FailingGenerator {
    async fn generate(&self, _request: &SuggestionRequest) -> Result<String, GenerateError> {
        Err(GenerateError::Api(claude::Error::Network(
            "connection refused".to_string(),
        )))
    }
}

/// One interaction with a [`ScriptedTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    Clear,
    Show(Notice),
    Ask(Prompt),
}

/// A table that answers prompts from a script and records every call.
///
/// Running out of answers behaves like closed input (`UnexpectedEof`).
#[derive(Debug, Default)]
pub struct ScriptedTable {
    answers: VecDeque<String>,
    events: Vec<TableEvent>,
}

impl ScriptedTable {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[TableEvent] {
        &self.events
    }

    /// Answers not consumed yet.
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    /// Every secret intensity that was put on screen, in order.
    pub fn secrets_shown(&self) -> impl Iterator<Item = (&Player, Intensity)> {
        self.events.iter().filter_map(|e| match e {
            TableEvent::Show(Notice::SecretIntensity { player, intensity }) => {
                Some((player, *intensity))
            }
            _ => None,
        })
    }

    pub fn agent_suggestions_shown(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TableEvent::Show(Notice::AgentSuggestion { .. })))
            .count()
    }

    /// Notices shown, without clears or prompts.
    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.events.iter().filter_map(|e| match e {
            TableEvent::Show(notice) => Some(notice),
            _ => None,
        })
    }
}

impl Table for ScriptedTable {
    fn clear(&mut self) -> io::Result<()> {
        self.events.push(TableEvent::Clear);
        Ok(())
    }

    fn show(&mut self, notice: Notice) -> io::Result<()> {
        self.events.push(TableEvent::Show(notice));
        Ok(())
    }

    fn ask(&mut self, prompt: Prompt) -> io::Result<String> {
        self.events.push(TableEvent::Ask(prompt));
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
