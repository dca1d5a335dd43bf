use md5::{Digest, Md5};
use serde_json::Value;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use crate::utils::paths::normcase;

/// Block size used when hashing file contents
pub const HASH_BLOCK_SIZE: usize = 65536;

/// Returns the file contents, or `None` if it is missing or unreadable
pub fn read_file(filename: &str) -> Option<String> {
    let filename = normcase(filename);
    let path = Path::new(&filename);
    if !path.is_file() {
        return None;
    }

    match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) => {
            tracing::debug!(target: "files", "Could not read {}: {}", filename, e);
            None
        }
    }
}

/// Returns the JSON-decoded file contents, or `None` if unreadable or invalid
pub fn read_and_decode_json_file(filename: &str) -> Option<Value> {
    let contents = read_file(filename)?;
    match serde_json::from_str(&contents) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(target: "files", "Invalid JSON in {}: {}", filename, e);
            None
        }
    }
}

/// Whether the file exists
pub fn file_exists(filename: &str) -> bool {
    Path::new(&normcase(filename)).is_file()
}

/// MD5 of the file contents on disk, as lower-case hex.
///
/// Hashes the raw bytes: line endings are not normalized, so a CRLF file
/// and its LF copy hash differently.
pub fn hash_file(filename: impl AsRef<Path>) -> std::io::Result<String> {
    let mut file = File::open(filename.as_ref())?;
    let mut hasher = Md5::new();
    let mut buf = vec![0u8; HASH_BLOCK_SIZE];

    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
