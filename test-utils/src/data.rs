use std::{
    io::{Error, ErrorKind, Result},
    path::{Path, PathBuf},
};

/// The directory of the test data relative to the workspace directory.
pub const DATA_DIR: &str = "data";

/// Gets the directory of the test data.
///
/// The workspace directory is the parent of this crate's manifest directory.
pub fn data_dir() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(|workspace| workspace.join(DATA_DIR))
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "missing cargo workspace directory"))
}

/// Resolves a file within the directory of the test data.
///
/// # Errors
/// Fails if the path doesn't point to an existing file.
pub fn data_file(components: &[&str]) -> Result<PathBuf> {
    let path = components
        .iter()
        .fold(data_dir()?, |path, component| path.join(component));
    if path.is_file() {
        Ok(path)
    } else {
        Err(Error::new(
            ErrorKind::NotFound,
            format!("missing data file '{}'", path.display()),
        ))
    }
}
