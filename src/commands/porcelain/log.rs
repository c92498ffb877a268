use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub fn log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let reverse_tips = self.branches().reverse_tips();
        let tip = self.branches().active_tip();

        for (oid, commit) in self.graph().history(tip) {
            let decoration = match reverse_tips.get(&oid) {
                Some(names) => self.tip_decoration(names),
                None => String::new(),
            };

            self.show_commit(&oid, commit, &decoration)?;
        }

        Ok(())
    }

    fn show_commit(
        &self,
        oid: &ObjectId,
        commit: &Commit,
        decoration: &str,
    ) -> anyhow::Result<()> {
        writeln!(self.writer(), "commit {}{}", oid.as_ref(), decoration)?;
        writeln!(self.writer(), "Date:   {}", commit.timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }

    fn tip_decoration(&self, names: &[String]) -> String {
        let active = self.branches().active_name();
        let names = names
            .iter()
            .map(|name| {
                if name == active {
                    format!("HEAD -> {}", name)
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(" ({})", names.green())
    }
}
