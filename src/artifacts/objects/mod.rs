//! Object types and content addressing
//!
//! All tracked content is identified by a SHA-1 hash of its serialized form:
//!
//! - **Blob**: raw file content, stored verbatim on disk
//! - **Commit**: an in-memory snapshot node (message, timestamp, blob
//!   references, parent link), identified by the hash of its manifest
//!
//! Blobs are the only objects persisted to the object store; commits live in
//! the in-process commit graph for the lifetime of a session.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
