use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_lines;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepoError;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub fn diff(&self, id_a: &str, id_b: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let commit_a = self.find_commit(id_a)?;
        let commit_b = self.find_commit(id_b)?;

        let snapshot_a = commit_a.snapshot();
        let snapshot_b = commit_b.snapshot();

        // Only filenames present in both commits are compared; files unique
        // to one side are skipped.
        for (file_path, oid_a) in &snapshot_a {
            let Some(oid_b) = snapshot_b.get(file_path) else {
                continue;
            };
            if oid_a == oid_b {
                continue;
            }

            let content_a = self.database().load(oid_a)?;
            let content_b = self.database().load(oid_b)?;
            let content_a = String::from_utf8_lossy(&content_a);
            let content_b = String::from_utf8_lossy(&content_b);

            writeln!(self.writer(), "diff {}", file_path.display())?;
            for edit in diff_lines(&content_a, &content_b) {
                if let Some(removed) = &edit.removed {
                    writeln!(
                        self.writer(),
                        "{}",
                        format!("- Line {}: {}", edit.line, removed).red()
                    )?;
                }
                if let Some(added) = &edit.added {
                    writeln!(
                        self.writer(),
                        "{}",
                        format!("+ Line {}: {}", edit.line, added).green()
                    )?;
                }
            }
        }

        Ok(())
    }

    /// Resolve a user-supplied id to a commit anywhere in the graph
    ///
    /// A malformed id is reported the same way as an unknown one.
    fn find_commit(&self, id: &str) -> anyhow::Result<&Commit> {
        let oid = ObjectId::try_parse(id.to_string())
            .map_err(|_| RepoError::CommitNotFound(id.to_string()))?;

        self.graph()
            .find(&oid)
            .ok_or_else(|| RepoError::CommitNotFound(id.to_string()).into())
    }
}
