//! Fake collaborators for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Result, SweepError};
use crate::git::{GitBackend, PushOutcome};
use crate::progress::Progress;
use crate::prompt::Prompter;
use crate::report::Reporter;

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn git_failure(command: &str, message: &str) -> SweepError {
    SweepError::GitCommand {
        command: command.to_string(),
        message: message.to_string(),
    }
}

#[derive(Debug, Default)]
pub struct FakeGit {
    remotes: Vec<String>,
    tags: HashMap<String, String>,
    all_refs: Vec<String>,
    remotes_error: Option<String>,
    delete_errors: HashMap<String, String>,
    pub tag_queries: RefCell<Vec<String>>,
    pub deleted: RefCell<Vec<(String, String)>>,
}

impl FakeGit {
    /// Adds a remote whose `ls-remote --tags` output is `raw`.
    pub fn with_tags(mut self, remote: &str, raw: &str) -> Self {
        self.remotes.push(remote.to_string());
        self.tags.insert(remote.to_string(), raw.to_string());
        self
    }

    pub fn with_all_refs(mut self, refs: &[&str]) -> Self {
        self.all_refs = strings(refs);
        self
    }

    pub fn failing_remotes(mut self, message: &str) -> Self {
        self.remotes_error = Some(message.to_string());
        self
    }

    pub fn failing_delete(mut self, reference: &str, message: &str) -> Self {
        self.delete_errors
            .insert(reference.to_string(), message.to_string());
        self
    }
}

impl GitBackend for FakeGit {
    fn list_remotes(&self) -> Result<Vec<String>> {
        match &self.remotes_error {
            Some(message) => Err(git_failure("remote", message)),
            None => Ok(self.remotes.clone()),
        }
    }

    fn list_remote_tags(&self, remote: &str) -> Result<String> {
        self.tag_queries.borrow_mut().push(remote.to_string());
        Ok(self.tags.get(remote).cloned().unwrap_or_default())
    }

    fn list_all_refs(&self) -> Result<Vec<String>> {
        Ok(self.all_refs.clone())
    }

    fn delete_ref(&self, remote: &str, reference: &str) -> Result<PushOutcome> {
        self.deleted
            .borrow_mut()
            .push((remote.to_string(), reference.to_string()));
        if let Some(message) = self.delete_errors.get(reference) {
            return Err(git_failure("push", message));
        }
        Ok(PushOutcome {
            remote: remote.to_string(),
            reference: reference.to_string(),
            output: format!(" - [deleted]         {reference}"),
        })
    }
}

/// Prompter with canned answers that records what it was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    confirm_answer: bool,
    remote_answer: Option<String>,
    picks: Option<Vec<String>>,
    pub confirmations: RefCell<usize>,
    pub remote_choices: RefCell<Vec<Vec<String>>>,
    pub offered: RefCell<Vec<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn confirming(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }

    pub fn choosing_remote(mut self, remote: &str) -> Self {
        self.remote_answer = Some(remote.to_string());
        self
    }

    pub fn choosing(mut self, picks: &[&str]) -> Self {
        self.picks = Some(strings(picks));
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, _default: bool) -> Result<bool> {
        *self.confirmations.borrow_mut() += 1;
        Ok(self.confirm_answer)
    }

    fn choose_one(&self, options: &[String]) -> Result<String> {
        self.remote_choices.borrow_mut().push(options.to_vec());
        Ok(self
            .remote_answer
            .clone()
            .or_else(|| options.first().cloned())
            .unwrap_or_default())
    }

    fn choose_many(&self, options: &[String]) -> Result<Vec<String>> {
        self.offered.borrow_mut().push(options.to_vec());
        Ok(self.picks.clone().unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Start(u64, String),
    Advance(u64, String),
    SetValue(u64, String),
    Stop,
}

#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub events: Vec<ProgressEvent>,
}

impl RecordingProgress {
    pub fn stops(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == ProgressEvent::Stop)
            .count()
    }
}

impl Progress for RecordingProgress {
    fn start(&mut self, total: u64, label: &str) {
        self.events.push(ProgressEvent::Start(total, label.to_string()));
    }

    fn advance(&mut self, by: u64, label: &str) {
        self.events.push(ProgressEvent::Advance(by, label.to_string()));
    }

    fn set_value(&mut self, value: u64, label: &str) {
        self.events
            .push(ProgressEvent::SetValue(value, label.to_string()));
    }

    fn stop(&mut self) {
        self.events.push(ProgressEvent::Stop);
    }
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub successes: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
    pub logs: RefCell<Vec<String>>,
}

impl Reporter for RecordingReporter {
    fn success(&self, text: &str) {
        self.successes.borrow_mut().push(text.to_string());
    }

    fn error(&self, text: &str) {
        self.errors.borrow_mut().push(text.to_string());
    }

    fn log(&self, text: &str) {
        self.logs.borrow_mut().push(text.to_string());
    }
}
