//! Paths to the test data of the workspace.

pub mod bert;
pub mod data;
