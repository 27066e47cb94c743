use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CopyError;

/// Collects every regular file under `source`, recursing into all
/// subdirectories, in the order the filesystem yields directory entries (no
/// sorting). Directories are never included and symlinks are not followed,
/// so a symlinked file or directory is skipped entirely.
pub fn enumerate(source: &Path) -> Result<Vec<PathBuf>, CopyError> {
    if !source.is_dir() {
        return Err(CopyError::SourceNotFound(source.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|err| CopyError::Traversal {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source.to_path_buf()),
            source: err,
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_every_regular_file_regardless_of_depth() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("top.txt"), b"top").unwrap();
        fs::write(root.join("a/one.txt"), b"one").unwrap();
        fs::write(root.join("a/b/two.txt"), b"two").unwrap();

        let found: HashSet<PathBuf> = enumerate(root).unwrap().into_iter().collect();
        let expected: HashSet<PathBuf> = [
            root.join("top.txt"),
            root.join("a/one.txt"),
            root.join("a/b/two.txt"),
        ]
        .into_iter()
        .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn directories_are_not_included() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("empty/nested")).unwrap();
        fs::write(root.join("only.txt"), b"x").unwrap();

        let found = enumerate(root).unwrap();
        assert_eq!(found, vec![root.join("only.txt")]);
    }

    #[test]
    fn empty_tree_enumerates_to_nothing() {
        let dir = tempdir().unwrap();
        assert!(enumerate(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_source_is_reported_as_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        match enumerate(&missing) {
            Err(CopyError::SourceNotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_skipped() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("real.txt"), b"real").unwrap();
        std::os::unix::fs::symlink(root.join("real.txt"), root.join("link.txt")).unwrap();

        let found = enumerate(root).unwrap();
        assert_eq!(found, vec![root.join("real.txt")]);
    }
}
