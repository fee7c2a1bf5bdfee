//! The two sweep pipelines: list, resolve a remote, select, then delete as one batch.

use tracing::debug;

use crate::batch::Batch;
use crate::cli::RefKind;
use crate::error::Result;
use crate::git::{GitBackend, delete_ref, list_branches, list_tags};
use crate::progress::Progress;
use crate::prompt::Prompter;
use crate::refs::RemoteRefs;
use crate::report::{NOTHING_SELECTED, Reporter, deleted_message};
use crate::select::{PatternSet, preferred_remote, resolve_remote, select_manual};

#[derive(Debug, Clone, Default)]
pub struct SweepOptions {
    pub remote: Option<String>,
    pub dry_run: bool,
    pub json: bool,
}

pub struct Sweep<B, P, G, R> {
    pub git: B,
    pub prompter: P,
    pub progress: G,
    pub reporter: R,
    pub options: SweepOptions,
}

impl<B, P, G, R> Sweep<B, P, G, R>
where
    B: GitBackend,
    P: Prompter,
    G: Progress,
    R: Reporter,
{
    /// Deletes refs the user picks from a list.
    pub fn select(&mut self, kind: RefKind) -> Result<()> {
        let active = self.active_refs(kind)?;
        let selected = select_manual(&active.refs, &self.prompter)?;
        self.delete(&active.remote, &selected)
    }

    /// Deletes every ref matching one of `patterns`.
    ///
    /// Patterns are compiled before git or the user is consulted.
    pub fn regex(&mut self, kind: RefKind, patterns: &[String]) -> Result<()> {
        let patterns = PatternSet::compile(patterns)?;
        let active = self.active_refs(kind)?;
        let selected = patterns.select(&active.refs, &self.reporter);
        self.delete(&active.remote, &selected)
    }

    fn active_refs(&self, kind: RefKind) -> Result<RemoteRefs> {
        let grouped = match kind {
            RefKind::Branches => list_branches(&self.git)?,
            RefKind::Tags => list_tags(&self.git)?,
        };
        match self.options.remote.as_deref() {
            Some(remote) => preferred_remote(&grouped, remote, &self.git),
            None => resolve_remote(&grouped, &self.prompter),
        }
    }

    fn delete(&mut self, remote: &str, selected: &[String]) -> Result<()> {
        if self.options.dry_run {
            self.print_selection(remote, selected);
            return Ok(());
        }

        let git = &self.git;
        let completed = Batch {
            prompter: &self.prompter,
            progress: &mut self.progress,
            reporter: &self.reporter,
        }
        .run(selected, |reference| {
            let outcome = delete_ref(git, remote, reference)?;
            debug!(
                remote = %outcome.remote,
                reference = %outcome.reference,
                output = %outcome.output,
                "push finished"
            );
            Ok(outcome)
        })?;

        if completed {
            self.reporter.success(&deleted_message(remote, selected.len()));
        }
        Ok(())
    }

    fn print_selection(&self, remote: &str, selected: &[String]) {
        if self.options.json {
            println!("{}", serde_json::Value::from(selected.to_vec()));
            return;
        }
        if selected.is_empty() {
            self.reporter.success(NOTHING_SELECTED);
            return;
        }
        self.reporter.log(&format!("Would delete from {remote}:"));
        for reference in selected {
            self.reporter.log(&format!("  • {reference}"));
        }
    }
}
