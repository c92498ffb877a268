use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepoError;
use anyhow::Context;
use bytes::Bytes;

use std::path::Path;

/// Content-addressable object store
///
/// Every stored object is one flat file under the objects directory, named by
/// its full id and holding the serialized content verbatim. Storing is keyed
/// by content, so re-storing identical content is a no-op.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store an object, returning its content-derived id
    ///
    /// Idempotent: an object file that already exists is left untouched.
    pub fn store(&self, object: impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object.object_path()?);

        if !object_path.exists() {
            let object_content = object.serialize()?;
            std::fs::write(&object_path, &object_content).with_context(|| {
                format!("Unable to write object file {}", object_path.display())
            })?;
        }

        Ok(object_id)
    }

    /// Load the raw content stored under an id
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            return Err(RepoError::ObjectNotFound(object_id.to_string()).into());
        }

        let object_content = std::fs::read(&object_path)
            .with_context(|| format!("Unable to read object file {}", object_path.display()))?;

        Ok(object_content.into())
    }
}
