//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod selector;
pub mod settings;
pub mod solution;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use self::{selector::SelectorAttribute, settings::SettingsAttribute};

/// ```rust
/// use msbuild_selector::config_file::{self, ProjectConfigFile};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [msbuild_selector]
///     command = 'C:\Program Files\MSBuild\Current\Bin\MSBuild.exe'
///     patterns = [ '*.vcxproj' ]
///     configurations = [ 'Debug', 'Release' ]
///
///     [msbuild_selector.environment]
///     UseMultiToolTask = 'true'
///
///     [[msbuild_selector.projects]]
///     name = 'Solution'
///     file_name = 'app.sln'
///     directory = '.'
/// "#;
///
/// let config: ProjectConfigFile = config_file::project_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the project configuration file");
///
/// let selector = config.msbuild_selector.expect("Missing the selector section");
/// assert_eq!(
///     selector.command.as_deref(),
///     Some("C:\\Program Files\\MSBuild\\Current\\Bin\\MSBuild.exe")
/// );
/// assert_eq!(selector.patterns, Some(vec!["*.vcxproj".into()]));
/// assert_eq!(selector.configurations, Some(vec!["Debug".into(), "Release".into()]));
/// assert!(selector.platforms.is_none());
///
/// let environment = selector.environment.expect("Missing the environment");
/// assert_eq!(environment["UseMultiToolTask"], "true");
///
/// let projects = selector.projects.expect("Missing the global builds");
/// assert_eq!(projects[0].name, "Solution");
/// assert_eq!(projects[0].file_name, "app.sln");
/// ```
/// The [`ProjectConfigFile`] is the type that holds the project level configuration,
/// which lives under the `msbuild_selector` table
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct ProjectConfigFile<'a> {
    #[serde(borrow)]
    pub msbuild_selector: Option<SelectorAttribute<'a>>,
}

pub fn project_cfg_from_file(cfg: &'_ str) -> Result<ProjectConfigFile<'_>, toml::de::Error> {
    <ProjectConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}

pub fn settings_from_file(cfg: &'_ str) -> Result<SettingsAttribute<'_>, toml::de::Error> {
    <SettingsAttribute>::deserialize(&mut toml::Deserializer::new(cfg))
}
