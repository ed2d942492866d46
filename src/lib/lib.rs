pub mod cli;
pub mod config_file;
pub mod domain;
pub mod project_model;
pub mod selector;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::io::{self, BufRead, Write};
    use std::path::{Path, PathBuf};

    use color_eyre::{
        eyre::{eyre, Context},
        Result,
    };

    use crate::{
        cli::{
            input::{CliArgs, Command},
            output::{executors, panel},
        },
        domain::descriptor::{BuildChoices, BuildDescriptor, Selection},
        project_model::SelectorModel,
        selector::{BuildSelector, FileSelector, ProjectSelector},
        utils::{
            self,
            constants::error_messages,
            reader::{find_config_files, load_model},
        },
    };

    /// The main work of the project. Runs the task inputted in the CLI, reading the
    /// interactive selection from the standard input
    pub fn run_selector(cli_args: &CliArgs, invocation_dir: &Path) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_selector_with(cli_args, invocation_dir, stdin.lock(), stdout.lock())
    }

    /// Same as [`run_selector`], but the selection is read from *input* and everything
    /// presented to the user is written to *out*
    pub fn run_selector_with<R: BufRead, W: Write>(
        cli_args: &CliArgs,
        invocation_dir: &Path,
        input: R,
        mut out: W,
    ) -> Result<()> {
        let abs_project_root =
            determine_absolute_path_of_the_project_root(cli_args, invocation_dir)?;

        let config_files = find_config_files(
            &abs_project_root,
            cli_args.config.as_deref(),
            cli_args.settings.as_deref(),
        )?;
        log::debug!(
            "Launching a selector invocation for the configuration file: {:?}",
            config_files.project
        );

        let model: SelectorModel = load_model(&config_files)?;
        let selector = selector_for(&cli_args.command, invocation_dir);

        let choices: BuildChoices = selector
            .build_choices(&model)
            .with_context(|| error_messages::FAILURE_GENERATING_CHOICES)?;
        log::debug!("{} builds are available", choices.len());

        if cli_args.json {
            serde_json::to_writer_pretty(&mut out, &choices)
                .with_context(|| error_messages::FAILURE_SERIALIZING_CHOICES)?;
            writeln!(out)?;
            return Ok(());
        }

        panel::write_panel(&choices, &mut out)?;
        if cli_args.list {
            return Ok(());
        }

        let selection = match cli_args.select {
            Some(index) => Selection::Index(index),
            None => panel::read_selection(input, &mut out, choices.len())?,
        };

        match (choices.select(selection), selection) {
            (Some(descriptor), _) => launch(cli_args, descriptor, out),
            (None, Selection::Index(index)) => Err(eyre!(
                "There's no build #{index}, the available ones are {}",
                choices.len()
            )),
            (None, Selection::Cancelled) => {
                log::info!("No build selected");
                Ok(())
            }
        }
    }

    /// Picks the [`BuildSelector`] implementation for the command inputted in the CLI
    fn selector_for(command: &Command, invocation_dir: &Path) -> Box<dyn BuildSelector> {
        match command {
            Command::File { path } => Box::new(FileSelector::new(&invocation_dir.join(path))),
            Command::Project => Box::new(ProjectSelector),
        }
    }

    /// Prints or executes the selected build
    fn launch<W: Write>(
        cli_args: &CliArgs,
        descriptor: &BuildDescriptor,
        mut out: W,
    ) -> Result<()> {
        if cli_args.dry_run {
            writeln!(out, "{}", descriptor.command_line)?;
            return Ok(());
        }

        executors::run_build(descriptor).map(|_| ())
    }

    /// Resolves the full path of the location of the project's root on the fs. If the `--root`
    /// [`CliArgs`] arg is present, it will be used as the project root path, otherwise, we will
    /// assume that the project root is exactly in the same directory from where the
    /// binary was invoked by the user
    fn determine_absolute_path_of_the_project_root(
        cli_args: &CliArgs,
        invocation_dir: &Path,
    ) -> Result<PathBuf> {
        let project_root = cli_args
            .root
            .as_deref()
            .map(|root| invocation_dir.join(root))
            .unwrap_or_else(|| invocation_dir.to_path_buf());

        utils::fs::get_project_root_absolute_path(&project_root)
            .with_context(|| error_messages::FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH)
    }

    #[cfg(test)]
    mod tests {
        use std::fs;
        use std::io::Cursor;
        use std::path::Path;

        use clap::Parser;
        use color_eyre::Result;
        use tempfile::tempdir;

        use super::*;
        use crate::utils::constants::CONFIG_FILE_NAME;

        /// Creates a project with one `MSBuild` project declaring `src/main.cpp`, and
        /// returns the path of the source file
        fn setup_project(root: &Path) -> Result<PathBuf> {
            let msbuild = root.join("MSBuild.exe");
            fs::write(&msbuild, "")?;

            fs::write(
                root.join(CONFIG_FILE_NAME),
                format!(
                    r#"
                    [msbuild_selector]
                    command = '{}'
                    patterns = [ '*.vcxproj' ]
                    platforms = [ 'x64' ]
                    configurations = [ 'Debug' ]

                    [[msbuild_selector.projects]]
                    name = 'Solution'
                    file_name = 'app.sln'
                    directory = '.'
                    "#,
                    msbuild.display()
                ),
            )?;

            fs::write(
                root.join("app.vcxproj"),
                r#"<ItemGroup><ClCompile Include="src\main.cpp" /></ItemGroup>"#,
            )?;

            let source = root.join("src").join("main.cpp");
            fs::create_dir_all(root.join("src"))?;
            fs::write(&source, "int main() {}")?;

            Ok(source)
        }

        fn run(args: &[&str], root: &Path, input: &str) -> Result<String> {
            let cli_args = CliArgs::parse_from(args);
            let mut out = Vec::new();
            run_selector_with(&cli_args, root, Cursor::new(input.to_string()), &mut out)?;
            Ok(String::from_utf8(out)?)
        }

        #[test]
        fn test_list_file_builds() -> Result<()> {
            let temp = tempdir()?;
            setup_project(temp.path())?;

            let panel = run(&["", "--list", "file", "src/main.cpp"], temp.path(), "")?;
            let lines: Vec<&str> = panel.lines().collect();

            assert_eq!(
                lines,
                vec![
                    "[0] main.cpp (app): x64/Debug",
                    "[1] app: x64/Debug",
                    "[2] Solution: x64/Debug",
                ]
            );
            Ok(())
        }

        #[test]
        fn test_list_project_builds() -> Result<()> {
            let temp = tempdir()?;
            setup_project(temp.path())?;

            let panel = run(&["", "--list", "project"], temp.path(), "")?;
            assert_eq!(panel.lines().count(), 2);
            assert!(panel.contains("app: x64/Debug"));
            assert!(panel.contains("Solution: x64/Debug"));
            Ok(())
        }

        #[test]
        fn test_dry_run_prints_the_selected_command_line() -> Result<()> {
            let temp = tempdir()?;
            setup_project(temp.path())?;

            let output = run(
                &["", "--select", "0", "--dry-run", "file", "src/main.cpp"],
                temp.path(),
                "",
            )?;
            let command_line = output.lines().last().unwrap_or_default();

            assert!(command_line.contains("MSBuild.exe app.vcxproj"));
            assert!(command_line.ends_with(
                r"/p:Platform=x64;Configuration=Debug /target:ClCompile /property:SelectedFiles=src\main.cpp"
            ));
            Ok(())
        }

        #[test]
        fn test_interactive_selection() -> Result<()> {
            let temp = tempdir()?;
            setup_project(temp.path())?;

            let output = run(&["", "--dry-run", "project"], temp.path(), "1\n")?;
            assert!(output
                .lines()
                .last()
                .is_some_and(|line| line.ends_with("app.sln /p:Platform=x64;Configuration=Debug")));
            Ok(())
        }

        #[test]
        fn test_cancelled_selection_does_nothing() -> Result<()> {
            let temp = tempdir()?;
            setup_project(temp.path())?;

            let output = run(&["", "--dry-run", "project"], temp.path(), "q\n")?;
            assert!(!output.contains("/p:Platform"));
            Ok(())
        }

        #[test]
        fn test_out_of_range_selection_is_an_error() -> Result<()> {
            let temp = tempdir()?;
            setup_project(temp.path())?;

            let args = ["", "--select", "5", "--dry-run", "project"];
            assert!(run(&args, temp.path(), "").is_err());
            Ok(())
        }

        #[test]
        fn test_json_output() -> Result<()> {
            let temp = tempdir()?;
            setup_project(temp.path())?;

            let output = run(&["", "--json", "file", "src/main.cpp"], temp.path(), "")?;
            let json: serde_json::Value = serde_json::from_str(&output)?;
            let builds = json.as_array().expect("the builds are a JSON array");

            assert_eq!(builds.len(), 3);
            assert_eq!(builds[0]["display_label"], "main.cpp (app): x64/Debug");
            assert_eq!(builds[0]["command_line"][1], "app.vcxproj");
            assert!(builds[0].get("environment").is_none());
            Ok(())
        }

        #[test]
        fn test_root_and_missing_configuration() -> Result<()> {
            let temp = tempdir()?;
            let project_root = temp.path().join("project");
            fs::create_dir_all(&project_root)?;

            assert!(run(&["", "--list", "project"], &project_root, "").is_err());

            setup_project(&project_root)?;
            let panel = run(&["", "--root", "project", "--list", "project"], temp.path(), "")?;
            assert!(panel.contains("app: x64/Debug"));
            Ok(())
        }
    }
}
