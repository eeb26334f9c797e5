use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Create an empty temporary tree to scan.
pub(crate) fn temp_tree() -> TempDir {
    TempDir::new().unwrap()
}

/// A duration of `n` days, the usual granularity in retention tests.
pub(crate) fn days(n: u64) -> Duration {
    Duration::from_secs(n * 86_400)
}

/// Create a file (and its parent directories) with an mtime `age` in the past.
pub(crate) fn write_file_aged(root: &Path, rel: &str, age: Duration) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, b"retention test data").unwrap();
    set_age(&path, age);
    path
}

/// Create a directory with an mtime `age` in the past.
///
/// Call this after populating the directory: writing children afterwards
/// refreshes the directory's mtime.
pub(crate) fn make_dir_aged(root: &Path, rel: &str, age: Duration) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(&path).unwrap();
    set_age(&path, age);
    path
}

/// Backdate an existing path's mtime by `age`.
pub(crate) fn set_age(path: &Path, age: Duration) {
    let mtime = SystemTime::now() - age;
    let file = File::open(path).unwrap();
    file.set_modified(mtime).unwrap();
}
