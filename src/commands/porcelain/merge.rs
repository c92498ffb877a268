use crate::areas::repository::Repository;
use crate::artifacts::merge::merge_snapshots;
use crate::errors::RepoError;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub fn merge(&mut self, source: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let source_tip = self
            .branches()
            .tip_of(source)?
            .ok_or_else(|| RepoError::NoCommits(source.to_string()))?;
        let active_name = self.branches().active_name().to_string();
        let active_tip = self
            .branches()
            .active_tip()
            .ok_or_else(|| RepoError::NoCommits(active_name.clone()))?;

        let outcome = {
            let ours = self
                .graph()
                .find(&active_tip)
                .ok_or_else(|| anyhow::anyhow!("commit {} is missing from the graph", active_tip))?;
            let theirs = self
                .graph()
                .find(&source_tip)
                .ok_or_else(|| anyhow::anyhow!("commit {} is missing from the graph", source_tip))?;

            merge_snapshots(ours, theirs)
        };

        for conflict in &outcome.conflicts {
            writeln!(
                self.writer(),
                "{}",
                format!("CONFLICT (content): {}", conflict.display()).red()
            )?;
        }

        // The merged snapshot lands on the working directory only; no merge
        // commit is recorded.
        self.materialize(&outcome.files)?;

        writeln!(
            self.writer(),
            "Merged branch {} into {}",
            source,
            active_name
        )?;

        Ok(())
    }
}
