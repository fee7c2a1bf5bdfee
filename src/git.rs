use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{Result, SweepError};
use crate::refs::GroupedRefs;

const TAG_PREFIX: &str = "refs/tags/";
const PEELED_SUFFIX: &str = "^{}";
const REMOTE_MARKER: &str = "remotes/";

/// Raw access to the version-control backend.
pub trait GitBackend {
    fn list_remotes(&self) -> Result<Vec<String>>;

    /// Raw `<sha>\t<ref>` lines for the tags of `remote`.
    fn list_remote_tags(&self, remote: &str) -> Result<String>;

    /// Every ref in the local view: local branches as `name`, tracking branches as
    /// `remotes/<remote>/<name>`.
    fn list_all_refs(&self) -> Result<Vec<String>>;

    fn delete_ref(&self, remote: &str, reference: &str) -> Result<PushOutcome>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    pub remote: String,
    pub reference: String,
    pub output: String,
}

/// Backend that shells out to the `git` executable.
#[derive(Debug, Clone, Default)]
pub struct ShellGit {
    repo: Option<PathBuf>,
}

impl ShellGit {
    pub fn new(repo: Option<PathBuf>) -> Self {
        Self { repo }
    }

    fn run(&self, args: &[&str]) -> Result<(String, String)> {
        let command = args.first().copied().unwrap_or_default().to_string();
        debug!(?args, "running git");

        let mut git = Command::new("git");
        if let Some(repo) = &self.repo {
            git.current_dir(repo);
        }
        let output = git
            .args(args)
            .output()
            .map_err(|source| SweepError::GitSpawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(SweepError::GitCommand {
                command,
                message: stderr,
            });
        }
        Ok((stdout, stderr))
    }
}

impl GitBackend for ShellGit {
    fn list_remotes(&self) -> Result<Vec<String>> {
        let (stdout, _) = self.run(&["remote"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn list_remote_tags(&self, remote: &str) -> Result<String> {
        let (stdout, _) = self.run(&["ls-remote", "--tags", remote])?;
        Ok(stdout)
    }

    fn list_all_refs(&self) -> Result<Vec<String>> {
        let (stdout, _) = self.run(&[
            "for-each-ref",
            "--format=%(refname)%09%(symref)",
            "refs/heads",
            "refs/remotes",
        ])?;
        Ok(parse_for_each_ref(&stdout))
    }

    fn delete_ref(&self, remote: &str, reference: &str) -> Result<PushOutcome> {
        let (stdout, stderr) = self.run(&["push", remote, reference, "--delete"])?;
        let output = [stdout.trim(), stderr.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n");
        Ok(PushOutcome {
            remote: remote.to_string(),
            reference: reference.to_string(),
            output,
        })
    }
}

/// Maps `for-each-ref` output onto the `branch -a` naming used by [`list_branches`].
/// Symbolic refs such as `origin/HEAD` are skipped.
fn parse_for_each_ref(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| {
            let (name, symref) = line.split_once('\t').unwrap_or((line, ""));
            if !symref.is_empty() {
                return None;
            }
            if let Some(local) = name.strip_prefix("refs/heads/") {
                Some(local.to_string())
            } else {
                name.strip_prefix("refs/")
                    .filter(|rest| rest.starts_with(REMOTE_MARKER))
                    .map(str::to_string)
            }
        })
        .collect()
}

/// Tags of every remote. Remotes without tags are still present, with no refs.
pub fn list_tags(git: &impl GitBackend) -> Result<GroupedRefs> {
    let mut grouped = GroupedRefs::new();
    for remote in git.list_remotes()? {
        grouped.insert_remote(&remote);
        let raw = git.list_remote_tags(&remote)?;
        for tag in parse_tag_lines(&raw) {
            grouped.push(&remote, tag);
        }
        debug!(%remote, "listed remote tags");
    }
    Ok(grouped)
}

fn parse_tag_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines()
        .filter_map(|line| line.split_once('\t').map(|(_, name)| name.trim()))
        .filter_map(|name| name.strip_prefix(TAG_PREFIX))
        .filter(|tag| !tag.ends_with(PEELED_SUFFIX))
}

/// Remote-tracking branches grouped by remote. Only remotes with at least one tracked
/// branch appear.
pub fn list_branches(git: &impl GitBackend) -> Result<GroupedRefs> {
    let mut grouped = GroupedRefs::new();
    for name in git.list_all_refs()? {
        let Some(tracking) = name.strip_prefix(REMOTE_MARKER) else {
            continue;
        };
        let Some((remote, branch)) = tracking.split_once('/') else {
            continue;
        };
        grouped.push(remote, branch);
    }
    debug!(remotes = grouped.len(), "listed remote branches");
    Ok(grouped)
}

/// Deletes one ref from `remote`. Branches and tags go through the same push.
pub fn delete_ref(git: &impl GitBackend, remote: &str, reference: &str) -> Result<PushOutcome> {
    debug!(%remote, %reference, "deleting remote ref");
    git.delete_ref(remote, reference)
}
