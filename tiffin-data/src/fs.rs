//! Capability-based filesystem helpers built on `cap-std` and `camino`.
//!
//! Catalogue files are always addressed by UTF-8 paths. Helpers resolve an
//! ambient directory handle first so file operations stay scoped to it.

use std::io;
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) a UTF-8 file path for writing.
///
/// Missing parent directories are created first.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = dir_and_file_name(path)?;
    dir.create(name.as_str())
}

/// Return whether a path exists and is a regular file using capability-based IO.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = dir_and_file_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Ensure the parent directory for `path` exists, handling absolute paths
/// safely for cap-std.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base, relative) = split_ambient_base(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    dir.create_dir_all(&relative)
}

/// Resolve an ambient directory handle for the parent of `path` together with
/// the file name component.
fn dir_and_file_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_string();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split a parent path into an ambient base directory and a relative suffix.
fn split_ambient_base(parent: &Utf8Path) -> io::Result<(Utf8PathBuf, Utf8PathBuf)> {
    let std_parent = parent.as_std_path();
    match std_parent.components().next() {
        // Windows absolute path with a drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let prefix_str = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            let base = Utf8PathBuf::from(prefix_str).join(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .or_else(|_| std_parent.strip_prefix(prefix.as_os_str()))
                .map_err(|_| io::Error::other("failed to strip prefix from parent path"))?;
            utf8_pair(base, relative)
        }
        // Unix-style absolute path.
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .map_err(|_| io::Error::other("failed to strip root from absolute path"))?;
            utf8_pair(base, relative)
        }
        // Relative path: resolve from the current directory.
        _ => Ok((Utf8PathBuf::from("."), parent.to_owned())),
    }
}

fn utf8_pair(
    base: Utf8PathBuf,
    relative: &std::path::Path,
) -> io::Result<(Utf8PathBuf, Utf8PathBuf)> {
    let relative = Utf8PathBuf::from_path_buf(relative.to_path_buf())
        .map_err(|_| io::Error::other("non-UTF-8 parent path"))?;
    Ok((base, relative))
}
