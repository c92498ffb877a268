use crate::areas::repository::Repository;
use crate::errors::RepoError;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    pub fn add(&mut self, path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let path = PathBuf::from(path);
        if !self.workspace().file_exists(&path) {
            return Err(RepoError::FileNotFound(path).into());
        }

        self.staging_mut().stage(path.clone());

        writeln!(self.writer(), "Staged {} for commit", path.display())?;

        Ok(())
    }
}
