//! Capability-based helpers for reading salon dataset files.
//!
//! Paths are UTF-8 (`camino`) and every open goes through `cap-std`, so the
//! ambient authority used to reach the filesystem is explicit at each call.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open the dataset file at `path` for reading.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open the directory containing `path` and return it with the file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("dataset path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Whether `path` names an existing regular file.
///
/// A missing parent directory surfaces as an `io::ErrorKind::NotFound` error.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    match dir.metadata(name.as_str()) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use std::io::Read;
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 path");
        (dir, root)
    }

    #[rstest]
    fn reads_an_existing_file(#[from(workspace)] (_dir, root): (TempDir, Utf8PathBuf)) {
        let path = root.join("salons.json");
        std::fs::write(&path, b"[]").expect("write dataset");

        let mut contents = String::new();
        open_utf8_file(&path)
            .expect("open dataset")
            .read_to_string(&mut contents)
            .expect("read dataset");
        assert_eq!(contents, "[]");
        assert!(file_is_file(&path).expect("inspect dataset"));
    }

    #[rstest]
    fn directories_are_not_files(#[from(workspace)] (_dir, root): (TempDir, Utf8PathBuf)) {
        let nested = root.join("nested");
        std::fs::create_dir(&nested).expect("create directory");
        assert!(!file_is_file(&nested).expect("inspect directory"));
    }

    #[rstest]
    fn missing_files_are_not_files(#[from(workspace)] (_dir, root): (TempDir, Utf8PathBuf)) {
        assert!(!file_is_file(&root.join("absent.json")).expect("inspect missing file"));
    }

    #[rstest]
    fn missing_parent_is_an_error(#[from(workspace)] (_dir, root): (TempDir, Utf8PathBuf)) {
        let err = file_is_file(&root.join("absent").join("salons.json"))
            .expect_err("parent does not exist");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
