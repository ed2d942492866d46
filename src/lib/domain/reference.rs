use std::path::PathBuf;

use serde::Serialize;

/// A project file which declares the scanned source file, along with the path
/// that the project file uses to refer to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReference {
    /// Absolute path of the project file
    pub project_path: PathBuf,
    /// The path of the source file, exactly as written inside the project file
    pub recorded_path: String,
}
