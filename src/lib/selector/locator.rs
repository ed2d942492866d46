//! Expands the user's glob patterns into the project files they match

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::utils;

/// Finds the project files matching a set of glob patterns rooted at a base directory.
///
/// The located paths are never cached: every call to [`ProjectLocator::projects`]
/// performs a fresh lookup on the filesystem
#[derive(Debug, Clone, Copy)]
pub struct ProjectLocator<'a> {
    base_dir: &'a Path,
    patterns: &'a [String],
}

impl<'a> ProjectLocator<'a> {
    pub fn new(base_dir: &'a Path, patterns: &'a [String]) -> Self {
        Self { base_dir, patterns }
    }

    /// Lazily yields the absolute path of every matching project file, in pattern order
    /// and then in filesystem order. A path matched by more than one pattern is yielded
    /// once per pattern.
    pub fn projects(&self) -> impl Iterator<Item = PathBuf> + 'a {
        let base_dir = self.base_dir;
        self.patterns
            .iter()
            .flat_map(move |pattern| expand_pattern(base_dir, pattern))
    }
}

fn expand_pattern(base_dir: &Path, pattern: &str) -> impl Iterator<Item = PathBuf> {
    // The base directory is taken literally, only the user's pattern has wildcards
    let pattern_with_path =
        Path::new(&Pattern::escape(&base_dir.to_string_lossy())).join(pattern);
    log::debug!("Looking for projects matching {pattern_with_path:?}");

    let paths = match glob::glob(&pattern_with_path.to_string_lossy()) {
        Ok(paths) => Some(paths),
        Err(e) => {
            log::warn!("Skipping the invalid project pattern {pattern:?}: {e}");
            None
        }
    };

    paths
        .into_iter()
        .flatten()
        .filter_map(|entry| match entry {
            Ok(path) => Some(utils::fs::absolute_path(&path)),
            Err(e) => {
                log::warn!("Skipping an unreadable project path: {e}");
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use color_eyre::Result;
    use tempfile::tempdir;

    use super::*;

    fn patterns(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_projects_follow_pattern_order() -> Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::create_dir_all(root.join("libs").join("core"))?;
        fs::write(root.join("app.vcxproj"), "")?;
        fs::write(root.join("tests.vcxproj"), "")?;
        fs::write(root.join("libs").join("core").join("core.vcxproj"), "")?;
        fs::write(root.join("app.sln"), "")?;

        let patterns = patterns(&["libs/**/*.vcxproj", "*.vcxproj"]);
        let locator = ProjectLocator::new(root, &patterns);
        let projects: Vec<PathBuf> = locator.projects().collect();

        assert_eq!(
            projects,
            vec![
                root.join("libs").join("core").join("core.vcxproj"),
                root.join("app.vcxproj"),
                root.join("tests.vcxproj"),
            ]
        );
        assert!(projects.iter().all(|p| p.is_absolute()));
        Ok(())
    }

    #[test]
    fn test_overlapping_patterns_yield_duplicates() -> Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("app.vcxproj"), "")?;

        let patterns = patterns(&["*.vcxproj", "app.*"]);
        let projects: Vec<PathBuf> = ProjectLocator::new(temp.path(), &patterns)
            .projects()
            .collect();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0], projects[1]);
        Ok(())
    }

    #[test]
    fn test_unmatched_and_invalid_patterns_yield_nothing() -> Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("app.vcxproj"), "")?;

        let patterns = patterns(&["*.csproj", "[", "*.vcxproj"]);
        let projects: Vec<PathBuf> = ProjectLocator::new(temp.path(), &patterns)
            .projects()
            .collect();

        assert_eq!(projects, vec![temp.path().join("app.vcxproj")]);
        Ok(())
    }

    #[test]
    fn test_every_call_rescans_the_filesystem() -> Result<()> {
        let temp = tempdir()?;
        let patterns = patterns(&["*.vcxproj"]);
        let locator = ProjectLocator::new(temp.path(), &patterns);

        assert_eq!(locator.projects().count(), 0);
        fs::write(temp.path().join("app.vcxproj"), "")?;
        assert_eq!(locator.projects().count(), 1);
        Ok(())
    }

    #[test]
    fn test_base_dir_with_glob_metacharacters() -> Result<()> {
        let temp = tempdir()?;
        let root = temp.path().join("repo [old]");
        fs::create_dir_all(&root)?;
        fs::write(root.join("app.vcxproj"), "")?;

        let patterns = patterns(&["*.vcxproj"]);
        let projects: Vec<PathBuf> = ProjectLocator::new(&root, &patterns).projects().collect();

        assert_eq!(projects, vec![root.join("app.vcxproj")]);
        Ok(())
    }
}
