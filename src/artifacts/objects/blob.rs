//! Blob object
//!
//! Blobs hold raw file content. They carry no metadata at all; the filename a
//! blob belonged to at a given commit is recorded by the commit's blob
//! references, not by the blob itself.
//!
//! On disk a blob is the content verbatim, one file per blob, named by id.

use crate::artifacts::objects::object::{Object, Packable};
use bytes::Bytes;
use derive_new::new;

/// File content addressed by the SHA-1 of its bytes
///
/// Identical content always hashes to the same id, so every distinct file
/// version is stored exactly once no matter how many commits reference it.
#[derive(Debug, Clone, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Object for Blob {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_content_yields_identical_ids() {
        let a = Blob::new(Bytes::from("hello"));
        let b = Blob::new(Bytes::from("hello"));

        assert_eq!(a.object_id().unwrap(), b.object_id().unwrap());
    }

    #[test]
    fn different_content_yields_different_ids() {
        let a = Blob::new(Bytes::from("hello"));
        let b = Blob::new(Bytes::from("world"));

        assert_ne!(a.object_id().unwrap(), b.object_id().unwrap());
    }

    #[test]
    fn serializes_content_verbatim() {
        let blob = Blob::new(Bytes::from("hello\nworld"));

        assert_eq!(blob.serialize().unwrap(), Bytes::from("hello\nworld"));
    }
}
