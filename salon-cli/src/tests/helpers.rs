//! Temporary dataset files for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// A scratch directory holding dataset files.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write dataset file");
}

/// Two salons in Paris, as a JSON dataset.
pub(super) const PARIS: &str = r#"[
  {
    "id": "p1",
    "name": "Salon du Marais",
    "latitude": 48.8590,
    "longitude": 2.3620,
    "rating": 4.2,
    "reviews": 31,
    "address": "Rue des Rosiers, Paris",
    "phone": "+33 1 23 45 67 89",
    "image": "https://example.com/p1.jpg"
  },
  {
    "id": "p2",
    "name": "Coiffure Montmartre",
    "latitude": 48.8867,
    "longitude": 2.3431,
    "rating": 3.9,
    "reviews": 12,
    "address": "Rue Lepic, Paris",
    "phone": "+33 1 98 76 54 32",
    "image": "https://example.com/p2.jpg"
  }
]"#;
