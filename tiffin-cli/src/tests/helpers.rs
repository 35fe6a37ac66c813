//! Fixture helpers shared across the CLI test modules.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure so fixture setup stays
/// terse.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary CSV dataset using the canonical column layout.
///
/// The backing directory lives as long as the fixture, so the dataset path
/// stays valid for the duration of a test.
#[derive(Debug)]
pub(super) struct DatasetFile {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl DatasetFile {
    /// Create a dataset holding `rows` beneath the canonical header.
    pub(super) fn new(rows: &str) -> Self {
        let dir = TempDir::new().expect("create temporary directory");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("restaurants.csv"))
            .expect("temporary path should be UTF-8");
        let mut contents = String::from("id,name,city,cuisine,rating,cost,address\n");
        contents.push_str(rows);
        write_utf8(&path, contents.as_bytes());
        Self { _dir: dir, path }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }
}
