use std::path::Path;

use crate::error::{Error, Result};

/// Writes `content` to `dest_path`, replacing any existing file.
///
/// Parent directories are not created: a missing directory is an error.
pub fn overwrite_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    std::fs::write(dest_path.as_ref(), content).map_err(Error::IoError)
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
