//! Directory listing for sample and preset browsers.
//!
//! Both listings are flat (no recursion) and sorted by name. Names that are
//! not valid UTF-8 are converted lossily.
//!
//! # Smart short strings
//!
//! Sample folders tend to repeat a prefix on every file (`kick_01.wav`,
//! `kick_02.wav`, ...). [`directory_contents`] can strip the prefix shared by
//! all names so a narrow list widget shows only the part that differs:
//!
//! ```no_run
//! use faderkit::file::directory_contents;
//!
//! let names = directory_contents("samples/kicks", true, true)?;
//! # Ok::<(), faderkit::file::FileError>(())
//! ```

use std::fs;
use std::path::Path;

use faderkit_core::logging::targets;

use super::error::{FileError, FileResult};

/// Which entries a listing keeps.
#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryFilter {
    Directories,
    Files,
}

/// List the sub-directories of `path`.
///
/// With `name_only` the bare directory names are returned, otherwise each
/// entry is `path/name`.
pub fn directories(path: impl AsRef<Path>, name_only: bool) -> FileResult<Vec<String>> {
    list(path.as_ref(), name_only, EntryFilter::Directories)
}

/// List the regular files in `path`.
///
/// With `name_only` the bare file names are returned, otherwise each entry is
/// `path/name`. When both `name_only` and `smart_short_strings` are set, the
/// longest prefix shared by all names is removed from each of them. Stripping
/// is skipped when fewer than two files are listed, or when the shared prefix
/// is an entire name (which would leave that entry empty). Full paths are
/// never stripped.
pub fn directory_contents(
    path: impl AsRef<Path>,
    name_only: bool,
    smart_short_strings: bool,
) -> FileResult<Vec<String>> {
    let mut names = list(path.as_ref(), name_only, EntryFilter::Files)?;
    if name_only && smart_short_strings {
        strip_common_prefix(&mut names);
    }
    Ok(names)
}

/// Length in bytes of the longest prefix shared by every name.
///
/// The result always falls on a character boundary of each name. Returns 0
/// for an empty slice.
pub fn common_prefix_len<S: AsRef<str>>(names: &[S]) -> usize {
    let Some((first, rest)) = names.split_first() else {
        return 0;
    };
    let first = first.as_ref();

    let mut len = first.len();
    for name in rest {
        let shared = first
            .char_indices()
            .zip(name.as_ref().chars())
            .find(|((_, a), b)| a != b)
            .map_or_else(
                || first.len().min(name.as_ref().len()),
                |((index, _), _)| index,
            );
        len = len.min(shared);
    }
    len
}

fn strip_common_prefix(names: &mut [String]) {
    if names.len() < 2 {
        return;
    }
    let prefix = common_prefix_len(names);
    if prefix == 0 || names.iter().any(|name| name.len() == prefix) {
        return;
    }
    for name in names.iter_mut() {
        name.drain(..prefix);
    }
}

fn list(path: &Path, name_only: bool, filter: EntryFilter) -> FileResult<Vec<String>> {
    let entries = fs::read_dir(path).map_err(|err| {
        tracing::warn!(target: targets::FILE, path = %path.display(), error = %err, "failed to open directory");
        FileError::from_io(err, path)
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| {
            tracing::warn!(target: targets::FILE, path = %path.display(), error = %err, "failed to read directory entry");
            FileError::from_io(err, path)
        })?;
        let file_type = entry
            .file_type()
            .map_err(|err| FileError::from_io(err, entry.path()))?;

        let keep = match filter {
            EntryFilter::Directories => file_type.is_dir(),
            EntryFilter::Files => file_type.is_file(),
        };
        if !keep {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name_only {
            names.push(name);
        } else {
            names.push(format!("{}/{}", path.display(), name));
        }
    }

    names.sort();
    tracing::debug!(target: targets::FILE, path = %path.display(), count = names.len(), "directory listed");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Creates a unique test directory with a standard structure.
    /// Returns the TempDir (which auto-cleans on drop) and the path.
    fn setup_test_dir() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let test_dir = temp_dir.path().to_path_buf();

        fs::create_dir_all(test_dir.join("kits")).unwrap();
        fs::create_dir_all(test_dir.join("loops/nested")).unwrap();

        File::create(test_dir.join("kick_02.wav")).unwrap();
        File::create(test_dir.join("kick_01.wav")).unwrap();

        (temp_dir, test_dir)
    }

    #[test]
    fn test_directories_names() {
        let (_temp, dir) = setup_test_dir();
        let names = directories(&dir, true).unwrap();
        assert_eq!(names, vec!["kits", "loops"]);
    }

    #[test]
    fn test_directories_full_paths() {
        let (_temp, dir) = setup_test_dir();
        let names = directories(&dir, false).unwrap();
        assert_eq!(
            names,
            vec![
                format!("{}/kits", dir.display()),
                format!("{}/loops", dir.display()),
            ]
        );
    }

    #[test]
    fn test_contents_are_files_only_and_sorted() {
        let (_temp, dir) = setup_test_dir();
        let names = directory_contents(&dir, true, false).unwrap();
        assert_eq!(names, vec!["kick_01.wav", "kick_02.wav"]);
    }

    #[test]
    fn test_smart_short_strings() {
        let (_temp, dir) = setup_test_dir();
        let names = directory_contents(&dir, true, true).unwrap();
        assert_eq!(names, vec!["1.wav", "2.wav"]);
    }

    #[test]
    fn test_full_paths_are_never_stripped() {
        let (_temp, dir) = setup_test_dir();
        let names = directory_contents(&dir, false, true).unwrap();
        assert_eq!(names[0], format!("{}/kick_01.wav", dir.display()));
    }

    #[test]
    fn test_single_file_is_not_stripped() {
        let temp = TempDir::new().unwrap();
        File::create(temp.path().join("snare.wav")).unwrap();

        let names = directory_contents(temp.path(), true, true).unwrap();
        assert_eq!(names, vec!["snare.wav"]);
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert!(directory_contents(temp.path(), true, true).unwrap().is_empty());
        assert!(directories(temp.path(), true).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_errors() {
        let temp = TempDir::new().unwrap();
        let err = directories(temp.path().join("missing"), true).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), temp.path().join("missing"));
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len::<&str>(&[]), 0);
        assert_eq!(common_prefix_len(&["solo"]), 4);
        assert_eq!(common_prefix_len(&["abc", "abd", "ab"]), 2);
        assert_eq!(common_prefix_len(&["xyz", "abc"]), 0);
        // "é" and "è" share a first byte; the prefix stops before both
        assert_eq!(common_prefix_len(&["café", "cafè"]), 3);
    }

    #[test]
    fn test_prefix_equal_to_whole_name_is_kept() {
        let mut names = vec!["kick".to_owned(), "kick_02".to_owned()];
        strip_common_prefix(&mut names);
        assert_eq!(names, vec!["kick", "kick_02"]);
    }
}
