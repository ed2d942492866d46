use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use indexmap::IndexMap;
use regex::Regex;

use crate::{
    config_file::{
        self, settings::SettingsAttribute, solution::SolutionAttribute, ProjectConfigFile,
    },
    domain::target::BuildTarget,
    project_model::{EnvVars, SelectorModel},
    utils::{self, constants::error_messages},
};

/// Details about the configuration files of a selector invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFiles {
    /// The project level configuration. Its directory is the project root
    pub project: PathBuf,
    /// The optional instance level defaults
    pub settings: Option<PathBuf>,
}

/// Resolves where the configuration files of the project live.
///
/// *project_root* - The directory where the `msbuild_selector.toml` file is looked up
/// when no explicit *config_file* is given. Relative explicit paths are resolved from
/// the project root.
///
/// This function fails if the project configuration file doesn't exist
pub fn find_config_files(
    project_root: &Path,
    config_file: Option<&Path>,
    settings_file: Option<&Path>,
) -> Result<ConfigFiles> {
    log::debug!("Searching for the MSBuild Selector configuration files...");

    let project = config_file.map_or_else(
        || project_root.join(utils::constants::CONFIG_FILE_NAME),
        |cfg| project_root.join(cfg),
    );

    if !project.is_file() {
        return Err(eyre!("{}: {project:?}", error_messages::CFG_FILE_NOT_FOUND));
    }

    Ok(ConfigFiles {
        project: utils::fs::absolute_path(&project),
        settings: settings_file
            .map(|settings| utils::fs::absolute_path(&project_root.join(settings))),
    })
}

/// Reads the configuration files from the filesystem and merges them into the
/// [`SelectorModel`] of this invocation
pub fn load_model(config_files: &ConfigFiles) -> Result<SelectorModel> {
    let raw_cfg = fs::read_to_string(&config_files.project).with_context(|| {
        format!("{}: {:?}", error_messages::READ_CFG_FILE, config_files.project)
    })?;
    let config = config_file::project_cfg_from_file(&raw_cfg).with_context(|| {
        format!("{}: {:?}", error_messages::PARSE_CFG_FILE, config_files.project)
    })?;

    let raw_settings = config_files
        .settings
        .as_ref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("{}: {path:?}", error_messages::READ_SETTINGS_FILE))
        })
        .transpose()?;
    let settings = match raw_settings.as_deref() {
        Some(raw) => config_file::settings_from_file(raw)
            .with_context(|| error_messages::PARSE_SETTINGS_FILE)?,
        None => SettingsAttribute::default(),
    };

    let base_dir = config_files
        .project
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    build_model(config, settings, &base_dir)
}

/// Merges the project configuration over the instance settings and validates the result.
///
/// Every value provided by the project configuration wins over the one from the settings
pub fn build_model(
    config: ProjectConfigFile<'_>,
    settings: SettingsAttribute<'_>,
    base_dir: &Path,
) -> Result<SelectorModel> {
    let selector = config
        .msbuild_selector
        .ok_or_else(|| eyre!(error_messages::MISSING_SELECTOR_SECTION))?;

    let msbuild_cmd =
        assemble_msbuild_cmd(selector.command.as_deref(), settings.command.as_deref())?;
    let platforms = assemble_names(
        selector.platforms,
        settings.platforms,
        error_messages::NO_PLATFORMS,
    )?;
    let configurations = assemble_names(
        selector.configurations,
        settings.configurations,
        error_messages::NO_CONFIGURATIONS,
    )?;
    let patterns = assemble_names(selector.patterns, None, error_messages::NO_PATTERNS)?;
    let file_regex = assemble_file_regex(settings.file_regex)?;
    let environment = assemble_environment(selector.environment);
    let solutions = assemble_solutions(selector.projects, base_dir);

    Ok(SelectorModel {
        base_dir: base_dir.to_path_buf(),
        msbuild_cmd,
        platforms,
        configurations,
        patterns,
        environment,
        file_regex,
        solutions,
    })
}

fn assemble_msbuild_cmd(project_cmd: Option<&str>, settings_cmd: Option<&str>) -> Result<PathBuf> {
    let command = project_cmd
        .or(settings_cmd)
        .ok_or_else(|| eyre!(error_messages::MISSING_COMMAND))?;

    let command_path = Path::new(command);
    if !command_path.exists() {
        return Err(eyre!("{}: {command:?}", error_messages::COMMAND_NOT_FOUND));
    }

    let normalized = utils::fs::normalize_path(command_path);
    log::debug!("Using MSBuild from {normalized:?}");
    Ok(normalized)
}

fn assemble_names(
    project_names: Option<Vec<Cow<'_, str>>>,
    settings_names: Option<Vec<Cow<'_, str>>>,
    error_message: &'static str,
) -> Result<Vec<String>> {
    let names: Vec<String> = project_names
        .or(settings_names)
        .unwrap_or_default()
        .into_iter()
        .map(Cow::into_owned)
        .collect();

    if names.is_empty() {
        Err(eyre!(error_message))
    } else {
        Ok(names)
    }
}

fn assemble_file_regex(file_regex: Option<Cow<'_, str>>) -> Result<Option<String>> {
    file_regex
        .map(|regex| -> Result<String> {
            Regex::new(&regex)
                .with_context(|| format!("{}: {regex:?}", error_messages::INVALID_FILE_REGEX))?;
            Ok(regex.into_owned())
        })
        .transpose()
}

fn assemble_environment(
    environment: Option<IndexMap<Cow<'_, str>, Cow<'_, str>>>,
) -> Option<EnvVars> {
    environment.map(|env| {
        env.into_iter()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    })
}

fn assemble_solutions(
    solutions: Option<Vec<SolutionAttribute<'_>>>,
    base_dir: &Path,
) -> Vec<BuildTarget<'static>> {
    solutions
        .unwrap_or_default()
        .into_iter()
        .map(|solution| {
            BuildTarget::new(
                solution.name.into_owned(),
                solution.file_name.into_owned(),
                base_dir.join(&*solution.directory),
            )
        })
        .collect()
}
