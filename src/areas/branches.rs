use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepoError;
use std::collections::HashMap;

/// Name of the branch every repository starts on
pub const DEFAULT_BRANCH: &str = "main";

/// Named pointers into the commit graph
///
/// Each branch maps to an optional tip commit id (None until the first commit
/// lands on it). Exactly one branch is active at any time. Creating a branch
/// under an existing name silently rebinds it to the active tip.
#[derive(Debug)]
pub struct BranchDirectory {
    branches: HashMap<String, Option<ObjectId>>,
    active: String,
}

impl BranchDirectory {
    pub fn new() -> Self {
        let mut branches = HashMap::new();
        branches.insert(DEFAULT_BRANCH.to_string(), None);

        BranchDirectory {
            branches,
            active: DEFAULT_BRANCH.to_string(),
        }
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    pub fn active_tip(&self) -> Option<ObjectId> {
        self.branches.get(&self.active).cloned().flatten()
    }

    /// Move the active branch's tip to a new commit
    pub fn set_active_tip(&mut self, oid: ObjectId) {
        self.branches.insert(self.active.clone(), Some(oid));
    }

    /// Bind a name to the active branch's current tip
    pub fn create(&mut self, name: &str) {
        let tip = self.active_tip();
        self.branches.insert(name.to_string(), tip);
    }

    /// Switch the active branch, returning the new active tip
    pub fn checkout(&mut self, name: &str) -> Result<Option<ObjectId>, RepoError> {
        match self.branches.get(name) {
            Some(tip) => {
                let tip = tip.clone();
                self.active = name.to_string();
                Ok(tip)
            }
            None => Err(RepoError::BranchNotFound(name.to_string())),
        }
    }

    /// Read a branch's tip without switching to it
    pub fn tip_of(&self, name: &str) -> Result<Option<ObjectId>, RepoError> {
        self.branches
            .get(name)
            .cloned()
            .ok_or_else(|| RepoError::BranchNotFound(name.to_string()))
    }

    /// Map each tip commit to the branch names pointing at it
    ///
    /// Names are sorted with the active branch first, so log decoration is
    /// deterministic.
    pub fn reverse_tips(&self) -> HashMap<ObjectId, Vec<String>> {
        let mut reverse: HashMap<ObjectId, Vec<String>> = HashMap::new();

        for (name, tip) in &self.branches {
            if let Some(oid) = tip {
                reverse.entry(oid.clone()).or_default().push(name.clone());
            }
        }

        for names in reverse.values_mut() {
            names.sort_by_key(|name| (name != &self.active, name.clone()));
        }

        reverse
    }
}

impl Default for BranchDirectory {
    fn default() -> Self {
        Self::new()
    }
}
