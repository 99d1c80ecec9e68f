//! Turning picked or dropped paths into a file selection.
//!
//! Paths the user names directly are taken as they are, whatever their
//! extension; validation decides later whether the selection is acceptable.
//! A dropped directory (typically a build output folder) contributes only the
//! artifact candidates found anywhere beneath it, skipping hidden entries.

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::file::FileEntry;
use crate::services::validation::{AAR_SUFFIX, POM_SUFFIX};

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["__MACOSX", "node_modules"];

fn is_skipped(name: &str) -> bool {
    name.starts_with('.') || SKIPPED_DIRS.contains(&name)
}

fn is_artifact_candidate(name: &str) -> bool {
    name.ends_with(AAR_SUFFIX) || name.ends_with(POM_SUFFIX)
}

fn file_entry(path: &Path) -> crate::error::Result<Option<FileEntry>> {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Ok(None);
    };
    let metadata = std::fs::metadata(path)?;
    Ok(Some(FileEntry {
        file_name: name.to_string(),
        file_path: path.to_string_lossy().to_string(),
        file_size: metadata.len(),
    }))
}

fn collect_artifacts(dir: &Path, entries: &mut Vec<FileEntry>) -> crate::error::Result<()> {
    let mut children: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<std::result::Result<Vec<_>, _>>()?
        .into_iter()
        .map(|e| e.path())
        .collect();
    // read_dir order is platform dependent.
    children.sort();

    for child in children {
        let Some(name) = child.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_skipped(name) {
            continue;
        }
        if child.is_dir() {
            collect_artifacts(&child, entries)?;
        } else if child.is_file() && is_artifact_candidate(name) {
            entries.extend(file_entry(&child)?);
        }
    }
    Ok(())
}

pub(crate) fn resolve_paths_inner(paths: &[PathBuf]) -> crate::error::Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(AppError::Io(format!(
                "Path does not exist: {}",
                path.display()
            )));
        }
        if path.is_dir() {
            collect_artifacts(path, &mut entries)?;
        } else {
            entries.extend(file_entry(path)?);
        }
    }
    Ok(entries)
}

/// Resolve on the blocking pool; directory walks touch the filesystem.
pub async fn resolve_paths(paths: Vec<PathBuf>) -> crate::error::Result<Vec<FileEntry>> {
    tokio::task::spawn_blocking(move || resolve_paths_inner(&paths))
        .await
        .map_err(|e| AppError::Internal(format!("spawn_blocking join error: {}", e)))?
}

/// Resolves dropped file/directory paths without changing the selection.
#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn resolve_dropped_paths(paths: Vec<String>) -> Result<Vec<FileEntry>, String> {
    resolve_paths(paths.into_iter().map(PathBuf::from).collect())
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.file_name.as_str()).collect()
    }

    #[test]
    fn test_no_paths_is_empty_selection() {
        assert!(resolve_paths_inner(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_explicit_files_kept_in_given_order() {
        let dir = tempfile::tempdir().unwrap();
        let pom = dir.path().join("lib.pom");
        let aar = dir.path().join("lib.aar");
        fs::write(&pom, vec![0u8; 512]).unwrap();
        fs::write(&aar, vec![0u8; 2048]).unwrap();

        let entries = resolve_paths_inner(&[aar.clone(), pom.clone()]).unwrap();
        assert_eq!(names(&entries), vec!["lib.aar", "lib.pom"]);
        assert_eq!(entries[0].file_size, 2048);
        assert_eq!(entries[1].file_size, 512);
        assert_eq!(entries[0].file_path, aar.to_string_lossy());
    }

    #[test]
    fn test_explicit_file_of_any_type_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let readme = dir.path().join("README.md");
        fs::write(&readme, "x").unwrap();

        let entries = resolve_paths_inner(&[readme]).unwrap();
        assert_eq!(names(&entries), vec!["README.md"]);
    }

    #[test]
    fn test_directory_contributes_only_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = dir.path().join("build").join("outputs");
        fs::create_dir_all(outputs.join("aar")).unwrap();
        fs::write(outputs.join("aar").join("lib-release.aar"), "a").unwrap();
        fs::write(outputs.join("lib-release.pom"), "p").unwrap();
        fs::write(outputs.join("mapping.txt"), "m").unwrap();

        let entries = resolve_paths_inner(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(names(&entries), vec!["lib-release.aar", "lib-release.pom"]);
    }

    #[test]
    fn test_hidden_and_skipped_dirs_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lib.aar"), "a").unwrap();
        fs::write(dir.path().join(".old.pom"), "p").unwrap();
        let macosx = dir.path().join("__MACOSX");
        fs::create_dir(&macosx).unwrap();
        fs::write(macosx.join("lib.pom"), "p").unwrap();
        let hidden = dir.path().join(".gradle");
        fs::create_dir(&hidden).unwrap();
        fs::write(hidden.join("cached.aar"), "c").unwrap();

        let entries = resolve_paths_inner(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(names(&entries), vec!["lib.aar"]);
    }

    #[test]
    fn test_nonexistent_path_returns_error() {
        let err = resolve_paths_inner(&[PathBuf::from("/nonexistent/path/lib.aar")]).unwrap_err();
        assert!(err.to_string().contains("does not exist"), "Error: {}", err);
    }

    #[tokio::test]
    async fn test_resolve_paths_async() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lib.pom"), "p").unwrap();
        let entries = resolve_paths(vec![dir.path().to_path_buf()]).await.unwrap();
        assert_eq!(names(&entries), vec!["lib.pom"]);
    }

    #[test]
    fn test_is_skipped() {
        assert!(is_skipped(".gradle"));
        assert!(is_skipped("__MACOSX"));
        assert!(is_skipped("node_modules"));
        assert!(!is_skipped("outputs"));
    }
}
