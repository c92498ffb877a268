//! Repository areas
//!
//! The working pieces a session is assembled from, following the same split
//! as a real version-control layout: the workspace (working directory), the
//! object database, the staging area, the branch directory, and the
//! `Repository` facade tying them together.

pub mod branches;
pub mod database;
pub mod repository;
pub mod staging;
pub mod workspace;
