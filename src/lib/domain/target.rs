//! The buildable units, before being expanded to every configuration/platform pair

use std::borrow::Cow;
use std::path::Path;

use crate::domain::commands::arguments::{Argument, Arguments};
use crate::utils::constants::msbuild;

/// One buildable unit: a project file invoked from a directory, plus the extra
/// arguments that narrow what gets built.
///
/// A [`BuildTarget`] is immutable once constructed. They are created fresh for every
/// project, or for every file found inside a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget<'a> {
    name: Cow<'a, str>,
    project_file: Cow<'a, str>,
    directory: Cow<'a, Path>,
    extra_params: Arguments<'a>,
}

impl<'a> BuildTarget<'a> {
    pub fn new<N, F, D>(name: N, project_file: F, directory: D) -> Self
    where
        N: Into<Cow<'a, str>>,
        F: Into<Cow<'a, str>>,
        D: Into<Cow<'a, Path>>,
    {
        Self::with_params(name, project_file, directory, Arguments::default())
    }

    pub fn with_params<N, F, D>(
        name: N,
        project_file: F,
        directory: D,
        extra_params: Arguments<'a>,
    ) -> Self
    where
        N: Into<Cow<'a, str>>,
        F: Into<Cow<'a, str>>,
        D: Into<Cow<'a, Path>>,
    {
        Self {
            name: name.into(),
            project_file: project_file.into(),
            directory: directory.into(),
            extra_params,
        }
    }

    /// Builds the project alone, without the projects it references
    pub fn project_only(project: &'a ProjectFile) -> Self {
        Self::with_params(
            project.name.as_str(),
            project.file_name.as_str(),
            project.directory.as_path(),
            Arguments::from_vec(vec![Argument::from(msbuild::NO_PROJECT_REFERENCES)]),
        )
    }

    /// Compiles only `file_path`, using the project's settings. The path must be spelled
    /// exactly like MSBuild knows it, because it is compared as is against the items
    /// of the project
    pub fn single_file(project: &'a ProjectFile, file_name: &str, file_path: &str) -> Self {
        Self::with_params(
            format!("{file_name} ({})", project.name),
            project.file_name.as_str(),
            project.directory.as_path(),
            Arguments::from_vec(vec![
                Argument::from(msbuild::TARGET_CL_COMPILE),
                Argument::from(format!("{}{file_path}", msbuild::SELECTED_FILES_PROPERTY)),
            ]),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_file(&self) -> &str {
        &self.project_file
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn extra_params(&self) -> &Arguments<'a> {
        &self.extra_params
    }
}

/// The pieces of a project file path that the targets are made of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    /// The directory holding the project file
    pub directory: std::path::PathBuf,
    /// The file name, with its extension
    pub file_name: String,
    /// The file name without its extension
    pub name: String,
}

impl ProjectFile {
    pub fn from_path(project_path: &Path) -> color_eyre::Result<Self> {
        let (directory, file_name, name) = crate::utils::fs::get_file_details(project_path)?;
        Ok(Self {
            directory,
            file_name,
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::Result;
    use std::path::PathBuf;

    #[test]
    fn test_new_target_has_no_extra_params() {
        let target = BuildTarget::new("Solution", "app.sln", Path::new("/repo"));
        assert_eq!(target.name(), "Solution");
        assert_eq!(target.project_file(), "app.sln");
        assert_eq!(target.directory(), Path::new("/repo"));
        assert!(target.extra_params().is_empty());
    }

    #[test]
    fn test_project_only_target() -> Result<()> {
        let project = ProjectFile::from_path(Path::new("/repo/libs/core.vcxproj"))?;
        let target = BuildTarget::project_only(&project);

        assert_eq!(target.name(), "core");
        assert_eq!(target.project_file(), "core.vcxproj");
        assert_eq!(target.directory(), Path::new("/repo/libs"));
        assert_eq!(
            target.extra_params().to_string(),
            "/property:BuildProjectReferences=false"
        );
        Ok(())
    }

    #[test]
    fn test_single_file_target() -> Result<()> {
        let project = ProjectFile::from_path(&PathBuf::from("/repo/app.vcxproj"))?;
        let target = BuildTarget::single_file(&project, "main.cpp", "src\\main.cpp");

        assert_eq!(target.name(), "main.cpp (app)");
        assert_eq!(target.project_file(), "app.vcxproj");
        assert_eq!(&*target.extra_params()[0], "/target:ClCompile");
        assert_eq!(
            &*target.extra_params()[1],
            "/property:SelectedFiles=src\\main.cpp"
        );
        Ok(())
    }
}
