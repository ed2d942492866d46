//! Expands a [`BuildTarget`] into one build for every configuration/platform pair

use std::path::Path;

use crate::domain::commands::arguments::{Argument, Arguments};
use crate::domain::descriptor::BuildDescriptor;
use crate::domain::target::BuildTarget;
use crate::project_model::{EnvVars, SelectorModel};
use crate::utils::constants::msbuild;

#[derive(Debug, Clone, Copy)]
pub struct BuildMatrix<'a> {
    msbuild_cmd: &'a Path,
    configurations: &'a [String],
    platforms: &'a [String],
    environment: Option<&'a EnvVars>,
    output_matcher: Option<&'a str>,
}

impl<'a> BuildMatrix<'a> {
    pub fn new(
        msbuild_cmd: &'a Path,
        configurations: &'a [String],
        platforms: &'a [String],
    ) -> Self {
        Self {
            msbuild_cmd,
            configurations,
            platforms,
            environment: None,
            output_matcher: None,
        }
    }

    /// Overrides the environment of the builds. An empty override is ignored, and the
    /// builds will inherit the environment of the process that runs them
    pub fn with_environment(mut self, environment: Option<&'a EnvVars>) -> Self {
        self.environment = environment.filter(|env| !env.is_empty());
        self
    }

    pub fn with_output_matcher(mut self, output_matcher: Option<&'a str>) -> Self {
        self.output_matcher = output_matcher;
        self
    }

    /// The number of builds that every target expands to
    pub fn size(&self) -> usize {
        self.configurations.len() * self.platforms.len()
    }

    /// Creates a build for every configuration/platform pair. Configurations drive the
    /// outer loop and platforms the inner one.
    ///
    /// When there's no configuration or no platform, there's no build at all
    pub fn expand(&self, target: &BuildTarget<'_>) -> Vec<BuildDescriptor<'a>> {
        let mut descriptors = Vec::with_capacity(self.size());

        for configuration in self.configurations {
            for platform in self.platforms {
                descriptors.push(self.descriptor_for(target, configuration, platform));
            }
        }

        descriptors
    }

    fn descriptor_for(
        &self,
        target: &BuildTarget<'_>,
        configuration: &str,
        platform: &str,
    ) -> BuildDescriptor<'a> {
        let extra_params = target.extra_params();
        let mut command_line = Arguments::with_capacity(3 + extra_params.len());
        command_line.create_and_push(self.msbuild_cmd);
        command_line.create_and_push(target.project_file().to_string());
        command_line.create_and_push(msbuild::platform_configuration_property(
            platform,
            configuration,
        ));
        command_line.extend(
            extra_params
                .iter()
                .map(|param| Argument::from(param.to_string())),
        );

        let display_label = format!("{}: {platform}/{configuration}", target.name());
        log::trace!("{display_label} => {command_line}");

        BuildDescriptor {
            display_label,
            command_line,
            working_directory: target.directory().to_path_buf(),
            environment: self.environment,
            output_matcher: self.output_matcher,
        }
    }
}

impl<'a> From<&'a SelectorModel> for BuildMatrix<'a> {
    fn from(model: &'a SelectorModel) -> Self {
        BuildMatrix::new(&model.msbuild_cmd, &model.configurations, &model.platforms)
            .with_environment(model.environment.as_ref())
            .with_output_matcher(model.file_regex.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::PathBuf;

    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|n| n.to_string()).collect()
    }

    fn app_target() -> BuildTarget<'static> {
        BuildTarget::new("App", "app.vcxproj", Path::new("/repo"))
    }

    #[test]
    fn test_configuration_major_order() {
        let configurations = names(&["Debug", "Release"]);
        let platforms = names(&["x86", "x64"]);
        let matrix = BuildMatrix::new(Path::new("msbuild"), &configurations, &platforms);

        let labels: Vec<String> = matrix
            .expand(&app_target())
            .into_iter()
            .map(|d| d.display_label)
            .collect();

        assert_eq!(
            labels,
            vec![
                "App: x86/Debug",
                "App: x64/Debug",
                "App: x86/Release",
                "App: x64/Release"
            ]
        );
    }

    #[test]
    fn test_every_pair_is_built_once() {
        let configurations = names(&["Debug", "Release", "Profile"]);
        let platforms = names(&["Win32", "x64", "ARM64", "ARM"]);
        let matrix = BuildMatrix::new(Path::new("msbuild"), &configurations, &platforms);

        let descriptors = matrix.expand(&app_target());
        let properties: HashSet<String> = descriptors
            .iter()
            .map(|d| d.command_line[2].to_string())
            .collect();

        assert_eq!(descriptors.len(), configurations.len() * platforms.len());
        assert_eq!(properties.len(), descriptors.len());
        assert_eq!(matrix.size(), 12);
    }

    #[test]
    fn test_no_configuration_or_no_platform_means_no_builds() {
        let configurations = names(&["Debug"]);
        let platforms = names(&["x64"]);
        let none: Vec<String> = vec![];

        assert!(BuildMatrix::new(Path::new("msbuild"), &none, &platforms)
            .expand(&app_target())
            .is_empty());
        assert!(BuildMatrix::new(Path::new("msbuild"), &configurations, &none)
            .expand(&app_target())
            .is_empty());
    }

    #[test]
    fn test_command_line_with_extra_params() {
        let configurations = names(&["Debug"]);
        let platforms = names(&["x64"]);
        let matrix = BuildMatrix::new(Path::new("msbuild"), &configurations, &platforms);
        let target = BuildTarget::with_params(
            "main.cpp (app)",
            "app.vcxproj",
            Path::new("/repo"),
            Arguments::from_vec(vec![
                Argument::from("/target:ClCompile"),
                Argument::from("/property:SelectedFiles=src/a.cpp"),
            ]),
        );

        let descriptors = matrix.expand(&target);
        let command_line: Vec<&str> = descriptors[0].command_line.iter().map(|a| &**a).collect();

        assert_eq!(
            command_line,
            vec![
                "msbuild",
                "app.vcxproj",
                "/p:Platform=x64;Configuration=Debug",
                "/target:ClCompile",
                "/property:SelectedFiles=src/a.cpp"
            ]
        );
        assert_eq!(descriptors[0].working_directory, PathBuf::from("/repo"));
        assert_eq!(descriptors[0].display_label, "main.cpp (app): x64/Debug");
    }

    #[test]
    fn test_environment_only_when_overridden() {
        let configurations = names(&["Debug"]);
        let platforms = names(&["x64"]);
        let empty = EnvVars::new();
        let mut env = EnvVars::new();
        env.insert("UseMultiToolTask".into(), "true".into());

        let matrix = BuildMatrix::new(Path::new("msbuild"), &configurations, &platforms);
        assert!(matrix.expand(&app_target())[0].environment.is_none());

        let with_empty = matrix.with_environment(Some(&empty));
        assert!(with_empty.expand(&app_target())[0].environment.is_none());

        let with_env = matrix
            .with_environment(Some(&env))
            .with_output_matcher(Some("^(.+)\\((\\d+)\\)"));
        let descriptors = with_env.expand(&app_target());
        let descriptor = &descriptors[0];
        assert_eq!(descriptor.environment, Some(&env));
        assert_eq!(descriptor.output_matcher, Some("^(.+)\\((\\d+)\\)"));
    }

    #[test]
    fn test_expansion_is_deterministic() {
        let configurations = names(&["Debug", "Release"]);
        let platforms = names(&["x64"]);
        let matrix = BuildMatrix::new(Path::new("msbuild"), &configurations, &platforms);

        assert_eq!(matrix.expand(&app_target()), matrix.expand(&app_target()));
    }
}
