//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings derived from an object's
//! serialized content. Equal content always yields the same id, which is what
//! makes the object store content-addressable.
//!
//! ## Storage
//!
//! Each object lives in `.mit/objects/<full-40-char-id>` as one flat file.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use std::path::PathBuf;

/// Content-derived object identifier
///
/// A validated 40-character lowercase hexadecimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id.to_lowercase()))
    }

    /// Convert to the file name used in the object store
    ///
    /// The store keeps one flat file per object, named by the full id.
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
