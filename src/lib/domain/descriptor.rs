//! The fully resolved builds handed to whoever executes them

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::commands::arguments::Arguments;
use crate::project_model::EnvVars;

/// One concrete, executable build
///
/// * display_label*: the human readable `name: platform/configuration` label
/// * command_line*: the executable followed by all of its arguments
/// * working_directory*: where the build must be launched from
/// * environment*: the variables to set for the build. When absent, the build inherits
///     the environment of the caller
/// * output_matcher*: a regex that the executor may use to find file and line
///     references in the output of the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDescriptor<'a> {
    pub display_label: String,
    pub command_line: Arguments<'a>,
    pub working_directory: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<&'a EnvVars>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_matcher: Option<&'a str>,
}

/// What the user picked from the list of [`BuildChoices`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Cancelled,
    Index(usize),
}

impl From<Option<usize>> for Selection {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Selection::Cancelled, Selection::Index)
    }
}

/// The flat, ordered list of every build available for a selector invocation.
///
/// Every [`BuildDescriptor`] carries its own label, so the labels presented to the
/// user and the builds they map to can't get out of sync
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildChoices<'a>(Vec<BuildDescriptor<'a>>);

impl<'a> BuildChoices<'a> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `(label, descriptor)` pairs, in presentation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BuildDescriptor<'a>)> {
        self.0
            .iter()
            .map(|descriptor| (descriptor.display_label.as_str(), descriptor))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0
            .iter()
            .map(|descriptor| descriptor.display_label.as_str())
            .collect()
    }

    pub fn extend(&mut self, descriptors: impl IntoIterator<Item = BuildDescriptor<'a>>) {
        self.0.extend(descriptors)
    }

    /// Returns the build chosen by the user, or nothing if the selection was cancelled
    pub fn select(&self, selection: Selection) -> Option<&BuildDescriptor<'a>> {
        match selection {
            Selection::Cancelled => None,
            Selection::Index(index) => {
                let descriptor = self.0.get(index);
                if descriptor.is_none() {
                    log::warn!(
                        "Selected build #{index} is out of range, there are only {} builds",
                        self.0.len()
                    );
                }
                descriptor
            }
        }
    }
}

impl<'a> FromIterator<BuildDescriptor<'a>> for BuildChoices<'a> {
    fn from_iter<I: IntoIterator<Item = BuildDescriptor<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
