use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn checkout(&mut self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        if self.branches().active_name() == name {
            writeln!(self.writer(), "Already on '{}'", name)?;
            return Ok(());
        }

        let tip = self.branches_mut().checkout(name)?;

        // Checkout is metadata-only unless the session opted into
        // materialization, in which case the target tip's snapshot is
        // written back the same way a merge result is.
        if self.options().materialize_on_checkout
            && let Some(oid) = tip
        {
            let files = self
                .graph()
                .find(&oid)
                .ok_or_else(|| anyhow::anyhow!("commit {} is missing from the graph", oid))?
                .snapshot();
            self.materialize(&files)?;
        }

        writeln!(self.writer(), "Switched to branch '{}'", name)?;

        Ok(())
    }
}
