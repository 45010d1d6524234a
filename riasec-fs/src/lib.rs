//! Capability-based file access for the RIASEC command-line tools.
//!
//! Paths arrive as UTF-8 strings from the command line or the environment.
//! Each helper resolves an ambient directory for the path and performs the
//! operation relative to it through `cap-std`.
#![forbid(unsafe_code)]

use std::io::{self, Read};
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open `path` for reading.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read the whole of `path` into a string.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened or is not
/// valid UTF-8.
pub fn read_utf8_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open_utf8_file(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Report whether `path` names an existing regular file.
///
/// Directories and other non-file entries yield `Ok(false)`.
///
/// # Errors
/// Returns an [`io::ErrorKind::NotFound`] error when the entry or its parent
/// directory is missing, and the underlying I/O error for anything else.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
///
/// Paths without a parent, or whose parent is the filesystem root, need no
/// work.
///
/// # Errors
/// Returns the underlying I/O error when a directory cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (anchor, relative) = split_anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    anchor.create_dir_all(&relative)
}

/// Open the directory containing `path` and return it with the file name.
fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} does not name a file"),
        )
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split `dir` into an opened anchor (root, drive prefix or `.`) and the
/// remaining relative path.
fn split_anchor(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let anchor: Utf8PathBuf = match dir.as_std_path().components().next() {
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(prefix).join(std::path::MAIN_SEPARATOR_STR)
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR_STR),
        _ => Utf8PathBuf::from("."),
    };
    let relative = if anchor == "." {
        dir.to_path_buf()
    } else {
        dir.strip_prefix(&anchor)
            .map_err(|_| io::Error::other(format!("{dir} does not start with {anchor}")))?
            .to_path_buf()
    };
    let opened = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((opened, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> TempDir {
        TempDir::new().expect("tempdir")
    }

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path")
    }

    #[rstest]
    fn reads_file_contents(workspace: TempDir) {
        let path = utf8(&workspace).join("answers.json");
        std::fs::write(&path, "[0, 1, 2]").expect("write fixture");
        assert_eq!(read_utf8_to_string(&path).expect("read"), "[0, 1, 2]");
    }

    #[rstest]
    fn distinguishes_files_directories_and_missing_entries(workspace: TempDir) {
        let root = utf8(&workspace);
        let file = root.join("catalog.db");
        std::fs::write(&file, b"").expect("write fixture");
        assert!(file_is_file(&file).expect("inspect file"));
        std::fs::create_dir(root.join("nested")).expect("mkdir");
        assert!(!file_is_file(&root.join("nested")).expect("inspect dir"));
        let missing = file_is_file(&root.join("missing.db")).expect_err("missing entry");
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn missing_parent_directory_is_not_found(workspace: TempDir) {
        let path = utf8(&workspace).join("absent").join("catalog.db");
        let err = file_is_file(&path).expect_err("missing parent");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn creates_nested_parents(workspace: TempDir) {
        let target = utf8(&workspace).join("a").join("b").join("catalog.db");
        ensure_parent_dir(&target).expect("create parents");
        assert!(target.parent().expect("has parent").is_dir());
    }

    #[rstest]
    #[case("catalog.db")]
    #[case("/")]
    fn trivial_parents_need_no_work(#[case] path: &str) {
        ensure_parent_dir(Utf8Path::new(path)).expect("nothing to create");
    }
}
