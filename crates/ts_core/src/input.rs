use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};
use crate::error::InputError;

/// Reads the whole file at `source`, or all of stdin when no path is given.
/// The text comes back untouched.
pub fn acquire(source: Option<&Path>) -> Result<String, InputError> {
    match source {
        Some(path) => read_file(path),
        None => {
            info!("No file provided. Reading from standard input...");
            acquire_from_reader(io::stdin().lock())
        }
    }
}

/// Blocks until `reader` reports end of stream.
pub fn acquire_from_reader<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    debug!("Read {} characters of input", text.chars().count());
    Ok(text)
}

fn read_file(path: &Path) -> Result<String, InputError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!("Read {} characters from {}", text.chars().count(), path.display());
            Ok(text)
        }
        // not valid UTF-8: the file exists, so this is a read failure
        Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(InputError::Io(e)),
        Err(_) => Err(InputError::NotFound { path: path.to_path_buf() }),
    }
}
