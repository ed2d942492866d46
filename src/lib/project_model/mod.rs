//! The read only data that every selector invocation works with, once the
//! configuration layers have been merged and validated

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::domain::target::BuildTarget;

/// The environment variables that a build is launched with
pub type EnvVars = IndexMap<String, String>;

/// The validated configuration of a selector invocation.
///
/// It is assembled from scratch on every run, so the edits made to the configuration
/// files are always honored by the next invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorModel {
    /// The directory that the project patterns are relative to
    pub base_dir: PathBuf,
    /// The normalized path of the `MSBuild` executable
    pub msbuild_cmd: PathBuf,
    pub platforms: Vec<String>,
    pub configurations: Vec<String>,
    pub patterns: Vec<String>,
    pub environment: Option<EnvVars>,
    /// Regex used to find the file/line references on the output of the builds
    pub file_regex: Option<String>,
    /// The global builds (a.k.a. solutions), always offered whatever the selector
    pub solutions: Vec<BuildTarget<'static>>,
}
