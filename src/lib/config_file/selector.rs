//! The project level configuration of the selector
use std::borrow::Cow;

use indexmap::IndexMap;
use serde::*;

use super::solution::SolutionAttribute;

/// [`SelectorAttribute`] - The `msbuild_selector` table of the project configuration.
/// Every key present here takes precedence over the same key in the settings file
/// * `command` - Path to the `MSBuild` executable
/// * `patterns` - Glob patterns, relative to the project root, matching the project files
/// * `platforms` - The platforms to build for (`x86`, `x64`...)
/// * `configurations` - The configurations to build (`Debug`, `Release`...)
/// * `environment` - Variables set for every build, on top of the ones inherited from the caller
/// * `projects` - The global builds, offered whatever the file being edited
///
/// ### Tests
///
/// ```rust
/// use msbuild_selector::config_file::selector::SelectorAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[msbuild_selector]
///     patterns = [ '*.vcxproj', 'libs/**/*.vcxproj' ]
///     platforms = [ 'x64' ]
///"#;
///
/// let config: SelectorAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the selector configuration");
///
/// assert_eq!(config.command, None);
/// assert_eq!(config.patterns, Some(vec!["*.vcxproj".into(), "libs/**/*.vcxproj".into()]));
/// assert_eq!(config.platforms, Some(vec!["x64".into()]));
/// assert_eq!(config.configurations, None);
/// assert!(config.environment.is_none());
/// assert!(config.projects.is_none());
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the configuration file.
///
/// For a test over a real example, please look at the
/// [`msbuild_selector::config_file::ProjectConfigFile`] doc-test
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct SelectorAttribute<'a> {
    #[serde(borrow)]
    pub command: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub patterns: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub platforms: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub configurations: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub environment: Option<IndexMap<Cow<'a, str>, Cow<'a, str>>>,
    #[serde(borrow)]
    pub projects: Option<Vec<SolutionAttribute<'a>>>,
}
