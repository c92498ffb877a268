use crate::areas::branches::BranchDirectory;
use crate::areas::database::Database;
use crate::areas::staging::StagingArea;
use crate::areas::workspace::Workspace;
use crate::artifacts::graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepoError;
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name of the on-disk marker directory at the repository root
pub const ROOT_DIR: &str = ".mit";

/// Per-session behavior switches
#[derive(Debug, Clone, Default, new)]
pub struct SessionOptions {
    /// When set, checkout also writes the target tip's files onto the
    /// working directory instead of switching metadata only
    pub materialize_on_checkout: bool,
}

/// Facade over all repository state for one session
///
/// Owns the on-disk areas (object store, workspace) and the in-memory state
/// (staging, branches, commit graph). Console output goes through the
/// injected writer so commands stay assertable in tests.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    staging: StagingArea,
    branches: BranchDirectory,
    graph: CommitGraph,
    options: SessionOptions,
    initialized: bool,
}

impl Repository {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        options: SessionOptions,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;

        let database = Database::new(path.join(ROOT_DIR).join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            staging: StagingArea::new(),
            branches: BranchDirectory::new(),
            graph: CommitGraph::new(),
            options,
            initialized: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root_dir(&self) -> PathBuf {
        self.path.join(ROOT_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    pub fn staging_mut(&mut self) -> &mut StagingArea {
        &mut self.staging
    }

    pub fn branches(&self) -> &BranchDirectory {
        &self.branches
    }

    pub fn branches_mut(&mut self) -> &mut BranchDirectory {
        &mut self.branches
    }

    pub fn graph(&self) -> &CommitGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut CommitGraph {
        &mut self.graph
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Guard shared by every command except `init`
    pub fn ensure_initialized(&self) -> Result<(), RepoError> {
        if self.initialized {
            Ok(())
        } else {
            Err(RepoError::NotInitialized)
        }
    }

    /// Write a snapshot's files onto the working directory
    ///
    /// Shared write-back path for merge and materializing checkout. Files are
    /// created or overwritten in path order; there is no rollback for partial
    /// writes.
    pub(crate) fn materialize(
        &self,
        files: &BTreeMap<PathBuf, ObjectId>,
    ) -> anyhow::Result<()> {
        for (file_path, oid) in files {
            let content = self.database.load(oid)?;
            self.workspace.write_file(file_path, &content)?;
        }

        Ok(())
    }
}
