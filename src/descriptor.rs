//! Project descriptor persisted as `gasproject.json` in the new project root.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// File name of the descriptor inside a scaffolded project.
pub const DESCRIPTOR_FILE: &str = "gasproject.json";

/// Record of what a project was scaffolded with. Written once at scaffold
/// time and never mutated afterward by this tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub project_name: String,
    pub project_path: String,
    pub gas_id: Option<String>,
    pub gas_id_dev: Option<String>,
    pub modules: Vec<String>,
}

impl ProjectDescriptor {
    /// Serialize to JSON with 4-space indentation.
    pub fn to_json(&self) -> Result<String, AppError> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(|source| AppError::ConfigParse {
            file: DESCRIPTOR_FILE.to_string(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the descriptor into `dir` as [`DESCRIPTOR_FILE`].
    pub fn write_to(&self, dir: &Path) -> Result<(), AppError> {
        fs::write(dir.join(DESCRIPTOR_FILE), self.to_json()?)?;
        Ok(())
    }

    /// Read a descriptor back from `dir`.
    pub fn load_from(dir: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(dir.join(DESCRIPTOR_FILE))?;
        serde_json::from_str(&content).map_err(|source| AppError::ConfigParse {
            file: DESCRIPTOR_FILE.to_string(),
            source,
        })
    }

    /// Directory name for user code: project name with spaces collapsed
    /// to underscores.
    pub fn app_dir_name(&self) -> String {
        self.project_name.replace(' ', "_")
    }
}
