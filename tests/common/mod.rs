// Shared fixtures for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `len` bytes to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, len: usize) {
    let full = root.join(rel);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, vec![b'x'; len]).unwrap();
}

/// dirA/
///   f1        2048 bytes
///   sub/
///     f2       500 bytes
pub fn create_sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "f1", 2048);
    write_file(dir.path(), "sub/f2", 500);
    dir
}

pub fn path_str(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}
