//! Launches the selected build and reports the file locations found on its output

use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use color_eyre::{
    eyre::{eyre, Context, ContextCompat},
    Result,
};
use regex::Regex;

use crate::domain::descriptor::BuildDescriptor;
use crate::utils::{constants::error_messages, fs::normalize_path};

/// A file reference found on the output of a build, like the ones emitted by the
/// compiler for the errors and warnings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    pub file: PathBuf,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub message: Option<String>,
}

impl Display for OutputLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
            if let Some(column) = self.column {
                write!(f, ":{column}")?;
            }
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// Finds the [`OutputLocation`]s on the lines of the output of a build.
///
/// Capture groups are, in order: file, line, column and message. Only the file one is
/// mandatory. Relative files are resolved against the directory where the build was
/// launched
#[derive(Debug)]
pub struct OutputMatcher<'a> {
    regex: Regex,
    base_dir: &'a Path,
}

impl<'a> OutputMatcher<'a> {
    pub fn new(file_regex: &str, base_dir: &'a Path) -> Result<Self> {
        let regex = Regex::new(file_regex)
            .with_context(|| format!("{}: {file_regex:?}", error_messages::INVALID_FILE_REGEX))?;
        Ok(Self { regex, base_dir })
    }

    pub fn locate(&self, line: &str) -> Option<OutputLocation> {
        let captures = self.regex.captures(line)?;
        let file = captures.get(1)?.as_str().trim();
        if file.is_empty() {
            return None;
        }

        let number = |group: usize| {
            captures
                .get(group)
                .and_then(|m| m.as_str().trim().parse::<u32>().ok())
        };
        let message = captures
            .get(4)
            .map(|m| m.as_str().trim())
            .filter(|m| !m.is_empty())
            .map(String::from);

        Some(OutputLocation {
            file: normalize_path(&self.base_dir.join(file)),
            line: number(2),
            column: number(3),
            message,
        })
    }
}

/// Executes the build described by the given [`BuildDescriptor`], streaming its output
/// to the terminal.
///
/// Returns the locations matched on the output, which are also logged once the build
/// ends. A build that does not exit successfully is an error
pub fn run_build(descriptor: &BuildDescriptor) -> Result<Vec<OutputLocation>> {
    let (program, args) = descriptor
        .command_line
        .split_first()
        .with_context(|| error_messages::EMPTY_COMMAND_LINE)?;

    let matcher = descriptor
        .output_matcher
        .map(|file_regex| OutputMatcher::new(file_regex, &descriptor.working_directory))
        .transpose()?;

    log::info!("Launching the build: {}", descriptor.display_label);
    log::trace!(
        "[{}] - Executing command => {:?} in {:?}",
        descriptor.display_label,
        descriptor.command_line.to_string(),
        descriptor.working_directory
    );

    let mut command = Command::new(program);
    command
        .args(args)
        .current_dir(&descriptor.working_directory)
        .stdout(Stdio::piped());
    if let Some(environment) = descriptor.environment {
        command.envs(environment);
    }

    let mut child = command
        .spawn()
        .with_context(|| format!("Could not launch the build: {}", descriptor.display_label))?;

    let mut locations = Vec::new();
    if let Some(stdout) = child.stdout.take() {
        if let Err(e) = stream_output(stdout, matcher.as_ref(), &mut locations) {
            return Err(abort_build(&mut child, e, &descriptor.display_label));
        }
    }

    let status = child
        .wait()
        .with_context(|| format!("[{}] - Command failed!", descriptor.display_label))?;

    for location in &locations {
        log::warn!("{location}");
    }

    if !status.success() {
        return Err(eyre!(
            "The build {} failed with {status}",
            descriptor.display_label
        ));
    }

    log::info!("Build {} finished", descriptor.display_label);
    Ok(locations)
}

/// Echoes every line of the build output, collecting the locations found on them
fn stream_output<R: Read>(
    output: R,
    matcher: Option<&OutputMatcher>,
    locations: &mut Vec<OutputLocation>,
) -> io::Result<()> {
    for line in BufReader::new(output).split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        let line = line.trim_end_matches('\r');
        println!("{line}");

        if let Some(location) = matcher.and_then(|m| m.locate(line)) {
            locations.push(location);
        }
    }
    Ok(())
}

/// Stops a build whose output can't be read anymore. The child is always reaped before
/// the read error is reported
fn abort_build(child: &mut Child, error: io::Error, label: &str) -> color_eyre::Report {
    if let Err(e) = child.kill() {
        log::debug!("[{label}] - The build had already exited: {e}");
    }
    if let Err(e) = child.wait() {
        log::warn!("[{label}] - Could not wait for the aborted build: {e}");
    }
    eyre!(error).wrap_err(format!("Could not read the output of the build: {label}"))
}
