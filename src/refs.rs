//! Remote ref collections.
//!
//! `GroupedRefs` is what listing produces: every remote with its refs, in the order the
//! remotes were discovered. `RemoteRefs` is a single remote's slice of it, which is what
//! selection works on once a remote has been resolved.

/// Refs of one remote. Names are short (`feature/x`, `v1.0.0`), never `refs/...`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteRefs {
    pub remote: String,
    pub refs: Vec<String>,
}

impl RemoteRefs {
    pub fn new(remote: impl Into<String>, refs: Vec<String>) -> Self {
        Self {
            remote: remote.into(),
            refs,
        }
    }
}

/// Refs grouped by remote, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedRefs {
    groups: Vec<RemoteRefs>,
}

impl GroupedRefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a remote with no refs. Does nothing if it is already known.
    pub fn insert_remote(&mut self, remote: &str) {
        self.group_mut(remote);
    }

    pub fn push(&mut self, remote: &str, reference: impl Into<String>) {
        self.group_mut(remote).refs.push(reference.into());
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn remotes(&self) -> Vec<String> {
        self.iter().map(|group| group.remote.clone()).collect()
    }

    pub fn get(&self, remote: &str) -> Option<&RemoteRefs> {
        self.iter().find(|group| group.remote == remote)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RemoteRefs> {
        self.groups.iter()
    }

    fn group_mut(&mut self, remote: &str) -> &mut RemoteRefs {
        let index = match self.groups.iter().position(|group| group.remote == remote) {
            Some(index) => index,
            None => {
                self.groups.push(RemoteRefs::new(remote, Vec::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }
}

impl<R, I, S> FromIterator<(R, I)> for GroupedRefs
where
    R: AsRef<str>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (R, I)>>(iter: T) -> Self {
        let mut grouped = Self::new();
        for (remote, refs) in iter {
            grouped.insert_remote(remote.as_ref());
            for reference in refs {
                grouped.push(remote.as_ref(), reference);
            }
        }
        grouped
    }
}
