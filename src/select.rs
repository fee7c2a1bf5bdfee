//! Narrowing listed refs down to what gets deleted.
//!
//! Resolution picks one remote out of [`GroupedRefs`]; the selectors then only ever see
//! that remote's [`RemoteRefs`].

use regex::Regex;
use tracing::{debug, info};

use crate::error::{Result, SweepError};
use crate::git::GitBackend;
use crate::prompt::Prompter;
use crate::refs::{GroupedRefs, RemoteRefs};
use crate::report::{Reporter, matched_message};

/// Picks the remote to operate on.
///
/// A single remote is used as is; several are offered through the remote prompt. No
/// remotes at all yields an empty context with nothing to select.
pub fn resolve_remote(grouped: &GroupedRefs, prompter: &impl Prompter) -> Result<RemoteRefs> {
    if grouped.is_empty() {
        debug!("no remotes to resolve");
        return Ok(RemoteRefs::default());
    }
    let mut remotes = grouped.remotes();
    let remote = if remotes.len() == 1 {
        remotes.swap_remove(0)
    } else {
        prompter.choose_one(&remotes)?
    };
    info!(%remote, "resolved remote");

    grouped
        .get(&remote)
        .cloned()
        .ok_or(SweepError::UnknownRemote { remote })
}

/// Uses a remote named up front instead of prompting.
///
/// Branch listings leave out remotes without tracked branches, so a configured remote
/// missing from `grouped` resolves to an empty context. Only remotes git does not know
/// are rejected.
pub fn preferred_remote(
    grouped: &GroupedRefs,
    remote: &str,
    git: &impl GitBackend,
) -> Result<RemoteRefs> {
    if let Some(refs) = grouped.get(remote) {
        return Ok(refs.clone());
    }
    if git.list_remotes()?.iter().any(|known| known == remote) {
        debug!(%remote, "preferred remote has no refs");
        return Ok(RemoteRefs::new(remote, Vec::new()));
    }
    Err(SweepError::UnknownRemote {
        remote: remote.to_string(),
    })
}

/// Lets the user tick refs by hand.
pub fn select_manual(refs: &[String], prompter: &impl Prompter) -> Result<Vec<String>> {
    if refs.is_empty() {
        return Ok(Vec::new());
    }
    let selected = prompter.choose_many(refs)?;
    debug!(count = selected.len(), "manual selection");
    Ok(selected)
}

/// Compiled regex patterns; a ref is selected when any of them matches.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Fails on the first pattern that does not compile.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| SweepError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_match(&self, reference: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(reference))
    }

    /// Matching refs in their original order, each at most once.
    pub fn select(&self, refs: &[String], reporter: &impl Reporter) -> Vec<String> {
        let mut matched: Vec<String> = Vec::new();
        for reference in refs {
            if self.is_match(reference) && !matched.contains(reference) {
                matched.push(reference.clone());
            }
        }
        debug!(count = matched.len(), "pattern selection");

        if !matched.is_empty() {
            reporter.success(&matched_message(&matched));
        }
        matched
    }
}
