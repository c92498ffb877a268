//! Commit object
//!
//! A commit is an immutable snapshot node: a message, a timestamp, an ordered
//! list of blob references, and an optional parent link. Commits form a
//! singly-linked chain per branch lineage and are kept in the in-process
//! commit graph, keyed by their own id.
//!
//! ## Identity
//!
//! A commit's id is the SHA-1 of its serialized form. The encoding covers the
//! ordered `(path, blob-id)` manifest plus the parent id, timestamp, and
//! message, so two distinct commits never collide on id even when they record
//! the same snapshot.

use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use derive_new::new;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp format used in commit metadata and log output
const TIMESTAMP_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

/// One file's content at one commit
///
/// Records that `path` had the content stored under `oid` when the commit was
/// created.
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct BlobRef {
    path: PathBuf,
    oid: ObjectId,
}

impl BlobRef {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }
}

/// Immutable snapshot node in the commit graph
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit id (None for the initial commit of a lineage)
    parent: Option<ObjectId>,
    /// Commit message
    message: String,
    /// Creation time, formatted for display
    timestamp: String,
    /// Ordered blob references; staged order, duplicates retained
    blobs: Vec<BlobRef>,
}

impl Commit {
    pub fn new(
        parent: Option<ObjectId>,
        message: String,
        timestamp: String,
        blobs: Vec<BlobRef>,
    ) -> Self {
        Commit {
            parent,
            message,
            timestamp,
            blobs,
        }
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn blobs(&self) -> &[BlobRef] {
        &self.blobs
    }

    /// Collapse the blob list into a filename-to-id map
    ///
    /// Later entries win for duplicate paths, matching the order-sensitive
    /// semantics of the blob list. The map iterates in path order, which keeps
    /// merge write-back and diff output deterministic.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, ObjectId> {
        self.blobs
            .iter()
            .map(|blob| (blob.path.clone(), blob.oid.clone()))
            .collect()
    }

    /// Current commit timestamp, honoring the MIT_COMMIT_DATE override
    ///
    /// When `MIT_COMMIT_DATE` is set (format `%Y-%m-%d %H:%M:%S %z`), its
    /// value is used instead of the wall clock so commit ids are reproducible
    /// across runs.
    pub fn timestamp_from_env() -> String {
        let timestamp = std::env::var("MIT_COMMIT_DATE")
            .ok()
            .and_then(|date_str| {
                chrono::DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z").ok()
            });

        match timestamp {
            Some(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
            None => chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        for blob in &self.blobs {
            object_content.push(format!("blob {} {}", blob.oid.as_ref(), blob.path.display()));
        }
        if let Some(parent) = &self.parent {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        object_content.push(format!("timestamp {}", self.timestamp));
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        let mut commit_bytes = Vec::new();
        commit_bytes.write_all(object_content.as_bytes())?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Object for Commit {}
