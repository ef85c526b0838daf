use std::{io::Result, path::PathBuf};

use crate::data::data_file;

/// Resolves the path to the Bert vocabulary fixture.
///
/// The fixture holds one token per line, the id of a token is the index of its line.
pub fn vocab() -> Result<PathBuf> {
    data_file(&["bert", "vocab.txt"])
}
