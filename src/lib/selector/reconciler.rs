//! Chooses how a source file is named when building it alone.
//!
//! The `SelectedFiles` property must name the file exactly like the project does, but
//! `MSBuild` won't expand the variables written inside it

use std::borrow::Cow;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

fn variable_in_path() -> &'static Regex {
    static VARIABLE_IN_PATH: OnceLock<Regex> = OnceLock::new();
    VARIABLE_IN_PATH.get_or_init(|| Regex::new(r"\$\(.*\).*").expect("Ill-formed variable regex"))
}

/// Whether the path contains an unresolved `$(Variable)` token
pub fn has_unresolved_variable(path_from_project: &str) -> bool {
    variable_in_path().is_match(path_from_project)
}

/// Keeps the path recorded on the project, unless it holds a variable, in which case
/// the path of the file on disk is used instead
pub fn choose_path<'a>(path_from_os: &'a Path, path_from_project: &'a str) -> Cow<'a, str> {
    if has_unresolved_variable(path_from_project) {
        log::debug!(
            "{path_from_project:?} holds a variable, using {path_from_os:?} to select the file"
        );
        path_from_os.to_string_lossy()
    } else {
        Cow::Borrowed(path_from_project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_fall_back_to_the_disk_path() {
        let chosen = choose_path(Path::new("/abs/foo.cpp"), "$(SrcDir)/foo.cpp");
        assert_eq!(chosen, "/abs/foo.cpp");

        let chosen = choose_path(Path::new("/abs/foo.cpp"), "..\\$(Platform)\\foo.cpp");
        assert_eq!(chosen, "/abs/foo.cpp");
    }

    #[test]
    fn test_plain_paths_are_kept_as_recorded() {
        let chosen = choose_path(Path::new("/abs/sub/foo.cpp"), "sub/foo.cpp");
        assert_eq!(chosen, "sub/foo.cpp");

        let chosen = choose_path(Path::new("/abs/sub/foo.cpp"), "sub\\foo.cpp");
        assert_eq!(chosen, "sub\\foo.cpp");
    }

    #[test]
    fn test_unresolved_variable_detection() {
        assert!(has_unresolved_variable("$(ProjectDir)main.cpp"));
        assert!(!has_unresolved_variable("$ProjectDir/main.cpp"));
        assert!(!has_unresolved_variable("src/(main).cpp"));
    }
}
