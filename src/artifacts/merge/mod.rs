//! Snapshot merge
//!
//! Combines two branch tips' snapshots into one file map. A filename present
//! in both tips with different blob ids is a conflict, reported as a
//! diagnostic only: the merge neither aborts nor writes conflict markers, and
//! the source side's content wins for the merged result regardless.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Result of merging a source tip into the active tip
#[derive(Debug)]
pub struct MergeOutcome {
    /// Final filename-to-id map, the union of both snapshots with the
    /// source side winning on overlap
    pub files: BTreeMap<PathBuf, ObjectId>,
    /// Filenames present in both tips with differing ids, one entry per
    /// filename, in source blob-list order
    pub conflicts: Vec<PathBuf>,
}

/// Merge the source tip's snapshot into the active tip's snapshot
pub fn merge_snapshots(ours: &Commit, theirs: &Commit) -> MergeOutcome {
    let ours_map = ours.snapshot();
    let mut files = ours_map.clone();
    let mut conflicts: Vec<PathBuf> = Vec::new();

    for blob in theirs.blobs() {
        if let Some(existing) = ours_map.get(blob.path())
            && existing != blob.oid()
            && !conflicts.iter().any(|p| p.as_path() == blob.path())
        {
            conflicts.push(blob.path().to_path_buf());
        }

        files.insert(blob.path().to_path_buf(), blob.oid().clone());
    }

    MergeOutcome { files, conflicts }
}
