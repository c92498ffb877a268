use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.root_dir().exists() {
            // the on-disk layout survives across runs; in-memory state does not
            self.mark_initialized();
            writeln!(
                self.writer(),
                "Repository already initialized in {}",
                self.path().display()
            )?;
            return Ok(());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create the objects directory")?;

        self.mark_initialized();

        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
