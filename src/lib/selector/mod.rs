//! The core of the program: finds the projects that build a file and generates every
//! build available for them.
//!
//! A selector invocation locates the project files ([`locator`]), scans them looking for
//! the file being edited ([`scanner`]), decides how that file must be named on the
//! command line ([`reconciler`]), and expands every resulting [`BuildTarget`] to all the
//! configured configuration/platform pairs ([`matrix`])

pub mod locator;
pub mod matrix;
pub mod reconciler;
pub mod scanner;

use std::path::{Path, PathBuf};

use color_eyre::Result;

use crate::domain::descriptor::BuildChoices;
use crate::domain::target::{BuildTarget, ProjectFile};
use crate::project_model::SelectorModel;
use crate::utils;

use self::{locator::ProjectLocator, matrix::BuildMatrix, scanner::FileReferenceScanner};

/// The entry points offered to the host. Given the configuration resolved for the
/// current invocation, returns every build the user can pick from
pub trait BuildSelector {
    fn build_choices<'a>(&self, model: &'a SelectorModel) -> Result<BuildChoices<'a>>;
}

/// Offers, for every project that declares the file:
/// * building that file alone, with the project's settings
/// * building that project alone, without its references
///
/// followed by the global builds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelector {
    file: PathBuf,
}

impl FileSelector {
    /// The file is made absolute and its `.`/`..` components are folded, since it may end
    /// up written as is on the command line
    pub fn new(file: &Path) -> Self {
        Self {
            file: utils::fs::normalize_path(&utils::fs::absolute_path(file)),
        }
    }
}

impl BuildSelector for FileSelector {
    fn build_choices<'a>(&self, model: &'a SelectorModel) -> Result<BuildChoices<'a>> {
        let matrix = BuildMatrix::from(model);
        let locator = ProjectLocator::new(&model.base_dir, &model.patterns);
        let scanner = FileReferenceScanner::new(&self.file)?;
        let mut choices = BuildChoices::default();

        for reference in scanner.scan(locator.projects()) {
            let file_path = reconciler::choose_path(&self.file, &reference.recorded_path);
            let project = ProjectFile::from_path(&reference.project_path)?;

            choices.extend(matrix.expand(&BuildTarget::single_file(
                &project,
                scanner.file_basename(),
                &file_path,
            )));
            choices.extend(matrix.expand(&BuildTarget::project_only(&project)));
        }

        if choices.is_empty() {
            log::info!(
                "No project declares {:?}, only the global builds are available",
                self.file
            );
        }

        add_solutions(&matrix, model, &mut choices);
        Ok(choices)
    }
}

/// Offers building every located project alone, followed by the global builds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSelector;

impl BuildSelector for ProjectSelector {
    fn build_choices<'a>(&self, model: &'a SelectorModel) -> Result<BuildChoices<'a>> {
        let matrix = BuildMatrix::from(model);
        let locator = ProjectLocator::new(&model.base_dir, &model.patterns);
        let mut choices = BuildChoices::default();

        for project_path in locator.projects() {
            let project = ProjectFile::from_path(&project_path)?;
            choices.extend(matrix.expand(&BuildTarget::project_only(&project)));
        }

        add_solutions(&matrix, model, &mut choices);
        Ok(choices)
    }
}

/// Appends the global builds (a.k.a. solutions) to the available builds
fn add_solutions<'a>(
    matrix: &BuildMatrix<'a>,
    model: &'a SelectorModel,
    choices: &mut BuildChoices<'a>,
) {
    for solution in &model.solutions {
        choices.extend(matrix.expand(solution));
    }
}
