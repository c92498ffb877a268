use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        // an existing name is silently rebound to the active tip
        self.branches_mut().create(name);

        writeln!(self.writer(), "Created branch {}", name)?;

        Ok(())
    }
}
