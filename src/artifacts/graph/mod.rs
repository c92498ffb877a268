//! In-process commit graph
//!
//! One explicit structure holds every commit created during a session: an
//! arena keyed by commit id, with parent links stored as ids rather than
//! references. `log` walks parent links from a branch tip; `find` looks up
//! any commit ever created on any branch, which is what lets diff and merge
//! reach across branches without switching.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;

/// Arena of commits addressed by their content-derived ids
#[derive(Debug, Default)]
pub struct CommitGraph {
    commits: std::collections::HashMap<ObjectId, Commit>,
}

impl CommitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a commit, computing and returning its id
    ///
    /// Re-inserting an identical commit is a no-op in effect, mirroring the
    /// content store's idempotence.
    pub fn insert(&mut self, commit: Commit) -> anyhow::Result<ObjectId> {
        let oid = commit.object_id()?;
        self.commits.insert(oid.clone(), commit);
        Ok(oid)
    }

    /// Look up a commit by id, across all branches
    pub fn find(&self, oid: &ObjectId) -> Option<&Commit> {
        self.commits.get(oid)
    }

    /// Lazy walk of parent links from `start` back to the root
    pub fn history(&self, start: Option<ObjectId>) -> History<'_> {
        History {
            graph: self,
            cursor: start,
        }
    }
}

/// Iterator over a commit's ancestry, newest first
pub struct History<'g> {
    graph: &'g CommitGraph,
    cursor: Option<ObjectId>,
}

impl<'g> Iterator for History<'g> {
    type Item = (ObjectId, &'g Commit);

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.cursor.take()?;
        let commit = self.graph.find(&oid)?;
        self.cursor = commit.parent().cloned();

        Some((oid, commit))
    }
}
