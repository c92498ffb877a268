use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{BlobRef, Commit};
use crate::errors::RepoError;
use std::io::Write;

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        if self.staging().is_empty() {
            return Err(RepoError::EmptyStagingArea.into());
        }

        // Snapshot each staged path's current content, in staged order.
        // Duplicate entries are retained.
        let staged = self.staging().paths().to_vec();
        let mut blobs = Vec::with_capacity(staged.len());
        for path in staged {
            let content = self.workspace().read_file(&path)?;
            let oid = self.database().store(Blob::new(content))?;
            blobs.push(BlobRef::new(path, oid));
        }

        let parent = self.branches().active_tip();
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let commit = Commit::new(
            parent,
            message.trim().to_string(),
            Commit::timestamp_from_env(),
            blobs,
        );
        let short_message = commit.short_message();

        let commit_id = self.graph_mut().insert(commit)?;
        self.branches_mut().set_active_tip(commit_id.clone());
        self.staging_mut().clear();

        writeln!(
            self.writer(),
            "[{} {}{}] {}",
            self.branches().active_name(),
            is_root,
            commit_id.to_short_oid(),
            short_message
        )?;

        Ok(())
    }
}
