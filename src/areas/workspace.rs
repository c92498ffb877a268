use anyhow::Context;
use bytes::Bytes;
use std::path::Path;

/// Working-directory access
///
/// All paths handed to the workspace are relative to the repository root; the
/// workspace joins them onto its own root before touching the filesystem.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    /// Write content to a workspace file, creating it if absent
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let file_path = self.path.join(file_path);

        if let Some(parent) = file_path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create parent directory for {}", file_path.display())
            })?;
        }

        std::fs::write(&file_path, content)
            .with_context(|| format!("Unable to write file {}", file_path.display()))?;

        Ok(())
    }
}
