use std::path::{Component, Path, PathBuf};

use color_eyre::{eyre::eyre, eyre::Context, Result};

/// Gets the canonical absolute route of the project root on the filesystem
pub fn get_project_root_absolute_path(project_root: &Path) -> Result<PathBuf> {
    let canonical = project_root
        .canonicalize()
        .with_context(|| format!("Could not resolve the path {project_root:?}"))?;
    Ok(canonical)
}

/// Lexical absolute path of `path`, relative paths being resolved against
/// the current working directory. Symbolic links are left untouched
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Returns the parent directory, the file name and the file stem of the
/// file pointed by `path`
pub fn get_file_details(path: &Path) -> Result<(PathBuf, String, String)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("Unexpected error getting the file name of {path:?}"))?;
    let file_stem = path
        .file_stem()
        .ok_or_else(|| eyre!("Unexpected error getting the file stem of {path:?}"))?;

    Ok((
        path.parent().unwrap_or(Path::new("")).to_path_buf(),
        file_name.to_string_lossy().to_string(),
        file_stem.to_string_lossy().to_string(),
    ))
}

/// Folds the `.` and `..` components of `path` without touching the filesystem
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}
