use std::path::PathBuf;

/// Ordered list of working-directory paths pending commit
///
/// Staging the same path twice produces duplicate entries; the commit
/// operation retains them in staged order. The list is cleared only after a
/// successful commit.
#[derive(Debug, Default)]
pub struct StagingArea {
    paths: Vec<PathBuf>,
}

impl StagingArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
