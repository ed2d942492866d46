//! Type for holding the global builds details
use std::borrow::Cow;

use serde::*;

/// [`SolutionAttribute`] - A global build, usually a Visual Studio solution, offered
/// on every selector invocation
/// * `name` - The label displayed for the build
/// * `file_name` - The solution or project file handed to `MSBuild`
/// * `directory` - The directory where `MSBuild` is launched. Relative directories are
/// resolved against the project root
///
/// ### Tests
///
/// ```rust
/// use msbuild_selector::config_file::solution::SolutionAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[[msbuild_selector.projects]]
///     name = 'Everything'
///     file_name = 'app.sln'
///     directory = 'build'
///"#;
///
/// let config: SolutionAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the global build");
///
/// assert_eq!(config.name, "Everything");
/// assert_eq!(config.file_name, "app.sln");
/// assert_eq!(config.directory, "build");
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct SolutionAttribute<'a> {
    #[serde(borrow)]
    pub name: Cow<'a, str>,
    #[serde(borrow)]
    pub file_name: Cow<'a, str>,
    #[serde(borrow)]
    pub directory: Cow<'a, str>,
}
