//! Constant value definitions to use across the whole program

/// The project level configuration file looked up at the project root
pub const CONFIG_FILE_NAME: &str = "msbuild_selector.toml";

/// The pieces of the command lines sent to `MSBuild`
pub mod msbuild {
    pub const TARGET_CL_COMPILE: &str = "/target:ClCompile";
    pub const SELECTED_FILES_PROPERTY: &str = "/property:SelectedFiles=";
    pub const NO_PROJECT_REFERENCES: &str = "/property:BuildProjectReferences=false";

    /// The single property token which selects the platform/configuration pair
    pub fn platform_configuration_property(platform: &str, configuration: &str) -> String {
        format!("/p:Platform={platform};Configuration={configuration}")
    }
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const READ_SETTINGS_FILE: &str = "Could not read the settings file";
    pub const PARSE_SETTINGS_FILE: &str = "Could not parse the settings file";
    pub const CFG_FILE_NOT_FOUND: &str = "No configuration file found for the project";
    pub const MISSING_SELECTOR_SECTION: &str =
        "A \"msbuild_selector\" section must be configured in the project";
    pub const MISSING_COMMAND: &str = "No MSBuild command configured";
    pub const COMMAND_NOT_FOUND: &str = "The configured MSBuild command does not exist";
    pub const NO_PLATFORMS: &str = "No platform configured";
    pub const NO_CONFIGURATIONS: &str = "No configuration configured";
    pub const NO_PATTERNS: &str = "A \"patterns\" section must be defined in the project";
    pub const INVALID_FILE_REGEX: &str = "The configured \"file_regex\" is not a valid regex";
    pub const INVALID_TARGET_FILE: &str = "The target file has no file name";
    pub const FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path to the project root";
    pub const FAILURE_GENERATING_CHOICES: &str = "Failed to generate the available builds";
    pub const FAILURE_READING_SELECTION: &str = "Could not read the build selection";
    pub const FAILURE_SERIALIZING_CHOICES: &str = "Could not serialize the available builds";
    pub const EMPTY_COMMAND_LINE: &str = "The selected build has an empty command line";
}

pub const CONFIG_FILE_MOCK: &str = r#"
[msbuild_selector]
command = 'C:\Program Files\MSBuild\Current\Bin\MSBuild.exe'
patterns = [ "*.vcxproj", "libs/**/*.vcxproj" ]
platforms = [ "x86", "x64" ]
configurations = [ "Debug", "Release" ]

[msbuild_selector.environment]
UseMultiToolTask = "true"

[[msbuild_selector.projects]]
name = "Solution"
file_name = "app.sln"
directory = "."
"#;

pub const SETTINGS_FILE_MOCK: &str = r#"
command = 'C:\Program Files\MSBuild\14.0\Bin\MSBuild.exe'
platforms = [ "Win32" ]
configurations = [ "Debug" ]
file_regex = '^\s*(.+?)\((\d+),?(\d+)?\)\s*:\s*(.*)$'
"#;
