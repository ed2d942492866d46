//! Finds the projects which declare a given source file.
//!
//! Project files are scanned as plain text, line by line, so a malformed or
//! partially written project never stops the lookup

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use color_eyre::{eyre::eyre, eyre::Context, Result};
use regex::{Regex, RegexBuilder};

use crate::domain::reference::ProjectReference;
use crate::utils::constants::error_messages;

#[derive(Debug, Clone)]
pub struct FileReferenceScanner {
    file_basename: String,
    regex: Regex,
}

impl FileReferenceScanner {
    /// Prepares the lookup of `target_file`. Only its file name takes part in the
    /// matching, the directories are ignored
    pub fn new(target_file: &Path) -> Result<Self> {
        let file_basename = target_file
            .file_name()
            .ok_or_else(|| eyre!("{}: {target_file:?}", error_messages::INVALID_TARGET_FILE))?
            .to_string_lossy()
            .to_string();

        // An item declared like `Include="..\src/main.cpp"`. The optional prefix must end in
        // a separator and can't cross the closing quote of the attribute
        let expression = format!(
            r#"(?:Compile|Include)\s*=\s*"((?:[^"]*[/\\])?{})""#,
            regex::escape(&file_basename)
        );
        let regex = RegexBuilder::new(&expression)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Could not build the lookup regex for {file_basename}"))?;

        Ok(Self {
            file_basename,
            regex,
        })
    }

    pub fn file_basename(&self) -> &str {
        &self.file_basename
    }

    /// Lazily scans every project in `projects`, yielding one [`ProjectReference`] for each
    /// project that declares the file, in the same order as the projects were given
    pub fn scan<'s, I>(&'s self, projects: I) -> impl Iterator<Item = ProjectReference> + 's
    where
        I: IntoIterator<Item = PathBuf>,
        I::IntoIter: 's,
    {
        projects
            .into_iter()
            .filter_map(move |project| self.find_in_project(&project))
    }

    /// Looks for the file on a single project. A project that can't be read is
    /// reported and then treated as if it didn't declare the file
    pub fn find_in_project(&self, project: &Path) -> Option<ProjectReference> {
        match self.recorded_path_in(project) {
            Ok(Some(recorded_path)) => {
                log::debug!("Found {recorded_path:?} on the project {project:?}");
                Some(ProjectReference {
                    project_path: project.to_path_buf(),
                    recorded_path,
                })
            }
            Ok(None) => {
                log::trace!("{} isn't declared on {project:?}", self.file_basename);
                None
            }
            Err(e) => {
                log::warn!("Skipping the project {project:?}, since it can't be read: {e}");
                None
            }
        }
    }

    /// The path recorded on the first matching line. The file is closed as soon as this
    /// returns, whether a line matched, the end was reached or the read failed
    fn recorded_path_in(&self, project: &Path) -> io::Result<Option<String>> {
        let reader = BufReader::new(File::open(project)?);

        for line in reader.split(b'\n') {
            let line = line?;
            let line = String::from_utf8_lossy(&line);
            if let Some(captures) = self.regex.captures(&line) {
                return Ok(captures.get(1).map(|path| path.as_str().to_string()));
            }
        }

        Ok(None)
    }
}
