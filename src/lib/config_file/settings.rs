//! The instance level defaults, shared by all the projects of a machine
use std::borrow::Cow;

use serde::*;

/// [`SettingsAttribute`] - The defaults used when the project configuration doesn't
/// provide a value
/// * `command` - Path to the `MSBuild` executable
/// * `platforms` - The default platforms
/// * `configurations` - The default configurations
/// * `file_regex` - Regex locating the file/line references on the builds output.
/// Captures are, in order: file, line, column and message
///
/// ### Tests
///
/// ```rust
/// use msbuild_selector::config_file::settings::SettingsAttribute;
///
/// const SETTINGS_FILE_MOCK: &str = r#"
///     command = '/opt/msbuild/MSBuild.exe'
///     configurations = [ 'Debug', 'Release' ]
///     file_regex = '^(.+)\((\d+)\)'
///"#;
///
/// let config: SettingsAttribute = toml::from_str(SETTINGS_FILE_MOCK)
///    .expect("A failure happened parsing the settings");
///
/// assert_eq!(config.command.as_deref(), Some("/opt/msbuild/MSBuild.exe"));
/// assert_eq!(config.platforms, None);
/// assert_eq!(config.configurations, Some(vec!["Debug".into(), "Release".into()]));
/// assert_eq!(config.file_regex.as_deref(), Some(r"^(.+)\((\d+)\)"));
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct SettingsAttribute<'a> {
    #[serde(borrow)]
    pub command: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub platforms: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub configurations: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub file_regex: Option<Cow<'a, str>>,
}
