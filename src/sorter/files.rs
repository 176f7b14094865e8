//! File classification, discovery and placement.

use crate::error::{MoodError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions read as UTF-8 text
pub const TEXT_EXTENSIONS: &[&str] = &["txt"];

/// Extensions handed to a transcriber
pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "flac", "aiff", "aif"];

/// Input kind, decided by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Text,
    Audio,
    Unknown,
}

impl FileKind {
    /// Classify by extension, case-insensitively
    pub fn of(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Text
        } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Audio
        } else {
            FileKind::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Text => "text",
            FileKind::Audio => "audio",
            FileKind::Unknown => "unknown",
        }
    }
}

/// A single file, or every file below a directory in sorted order
pub fn iter_input_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(MoodError::InputNotFound(input.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(input).to_path_buf();
            MoodError::io(path, e.into())
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// `root/<bucket>/<file name>`; separators in the bucket become `_`
pub fn build_output_path(root: &Path, bucket: &str, src: &Path) -> PathBuf {
    let safe_bucket = bucket.replace(['/', '\\'], "_");
    let name = src.file_name().unwrap_or(src.as_os_str());
    root.join(safe_bucket).join(name)
}

/// Whether both paths resolve to one existing file
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// `path` itself when free, else the first `stem_N.ext` that does not exist
pub fn available_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());

    (1usize..)
        .map(|n| {
            let name = match &ext {
                Some(ext) => format!("{stem}_{n}.{ext}"),
                None => format!("{stem}_{n}"),
            };
            path.with_file_name(name)
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Copy or move `src` to `dst`, creating parent directories.
///
/// A move tries a rename first and falls back to copy and remove, so it also
/// works across filesystems. Copying a file onto itself would truncate it,
/// so that case is an error.
pub fn move_or_copy(src: &Path, dst: &Path, move_file: bool) -> Result<()> {
    if is_same_file(src, dst) {
        return Err(MoodError::SameFile(src.to_path_buf()));
    }

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| MoodError::io(parent, e))?;
    }

    if move_file {
        if fs::rename(src, dst).is_ok() {
            return Ok(());
        }
        fs::copy(src, dst).map_err(|e| MoodError::io(src, e))?;
        fs::remove_file(src).map_err(|e| MoodError::io(src, e))?;
    } else {
        fs::copy(src, dst).map_err(|e| MoodError::io(src, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_kind() {
        assert_eq!(FileKind::of(Path::new("a.txt")), FileKind::Text);
        assert_eq!(FileKind::of(Path::new("b.WAV")), FileKind::Audio);
        assert_eq!(FileKind::of(Path::new("c.aif")), FileKind::Audio);
        assert_eq!(FileKind::of(Path::new("d.mp3")), FileKind::Unknown);
        assert_eq!(FileKind::of(Path::new("README")), FileKind::Unknown);
    }

    #[test]
    fn test_build_output_path() {
        let path = build_output_path(Path::new("out"), "positive", Path::new("in/sub/a.txt"));
        assert_eq!(path, PathBuf::from("out/positive/a.txt"));

        let path = build_output_path(Path::new("out"), "a/b", Path::new("x.txt"));
        assert_eq!(path, PathBuf::from("out/a_b/x.txt"));
    }

    #[test]
    fn test_iter_input_files_recursive_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.wav"), "a").unwrap();
        fs::write(dir.path().join("sub/c.txt"), "c").unwrap();

        let files = iter_input_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.wav"),
                PathBuf::from("b.txt"),
                PathBuf::from("sub/c.txt")
            ]
        );
    }

    #[test]
    fn test_iter_input_files_single_and_missing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("one.txt");
        fs::write(&file, "x").unwrap();
        assert_eq!(iter_input_files(&file).unwrap(), vec![file]);

        let missing = dir.path().join("missing");
        assert!(matches!(
            iter_input_files(&missing),
            Err(MoodError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_copy_keeps_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.txt");
        fs::write(&src, "좋다").unwrap();
        let dst = dir.path().join("out/positive/a.txt");

        move_or_copy(&src, &dst, false).unwrap();
        assert!(src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "좋다");
    }

    #[test]
    fn test_copy_onto_itself_is_refused() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.txt");
        fs::write(&src, "좋다").unwrap();
        let alias = dir.path().join("sub/../a.txt");
        fs::create_dir_all(dir.path().join("sub")).unwrap();

        for move_file in [false, true] {
            let err = move_or_copy(&src, &alias, move_file).unwrap_err();
            assert!(matches!(err, MoodError::SameFile(_)));
        }
        assert_eq!(fs::read_to_string(&src).unwrap(), "좋다");
    }

    #[test]
    fn test_available_path_adds_suffix() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        assert_eq!(available_path(&path), path);

        fs::write(&path, "x").unwrap();
        assert_eq!(available_path(&path), dir.path().join("a_1.txt"));

        fs::write(dir.path().join("a_1.txt"), "y").unwrap();
        assert_eq!(available_path(&path), dir.path().join("a_2.txt"));

        let bare = dir.path().join("README");
        fs::write(&bare, "z").unwrap();
        assert_eq!(available_path(&bare), dir.path().join("README_1"));
    }

    #[test]
    fn test_move_removes_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.txt");
        fs::write(&src, "x").unwrap();
        let dst = dir.path().join("out/neutral/a.txt");

        move_or_copy(&src, &dst, true).unwrap();
        assert!(!src.exists());
        assert!(dst.exists());
    }
}
