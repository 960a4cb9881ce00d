//! Template installation directory: the source of all copied files.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::AppError;

/// Environment variable naming the template installation directory.
pub const TEMPLATE_DIR_ENV: &str = "GASINIT_TEMPLATE_DIR";

/// Boilerplate files copied byte-for-byte from the template root into every
/// new project root.
pub const BASE_FILES: [&str; 5] =
    [".eslintrc.js", "tsconfig.json", ".claspignore", "Settings.ts", "init_node.bash"];

/// Name of the modules directory, both in the template and in new projects.
pub const MODULES_DIR: &str = "modules";

/// Shared interfaces file copied alongside any selected module.
pub const INTERFACES_FILE: &str = "interfaces.ts";

/// Optional application skeleton directory in the template.
pub const APP_SKELETON_DIR: &str = "app";

/// Deployment config consumed by clasp.
pub const CLASP_FILE: &str = ".clasp.json";

/// Handle on the template installation directory.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    root: PathBuf,
}

impl TemplateSource {
    /// Use an explicit template directory.
    pub fn new(root: PathBuf) -> Result<Self, AppError> {
        if !root.is_dir() {
            return Err(AppError::TemplateMissing(root.display().to_string()));
        }
        Ok(Self { root })
    }

    /// Resolve the template directory from a flag value or the
    /// `GASINIT_TEMPLATE_DIR` environment variable.
    pub fn discover(flag: Option<PathBuf>) -> Result<Self, AppError> {
        let root = match flag {
            Some(path) => path,
            None => match env::var_os(TEMPLATE_DIR_ENV) {
                Some(value) => PathBuf::from(value),
                None => {
                    return Err(AppError::validation(format!(
                        "No template directory. Pass --template-dir or set {}.",
                        TEMPLATE_DIR_ENV
                    )));
                }
            },
        };
        Self::new(root)
    }

    pub fn modules_dir(&self) -> PathBuf {
        self.root.join(MODULES_DIR)
    }

    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.modules_dir().join(name)
    }

    pub fn interfaces_file(&self) -> PathBuf {
        self.modules_dir().join(INTERFACES_FILE)
    }

    pub fn app_skeleton_dir(&self) -> PathBuf {
        self.root.join(APP_SKELETON_DIR)
    }

    pub fn clasp_file(&self) -> PathBuf {
        self.root.join(CLASP_FILE)
    }

    pub fn base_file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Module names available in this template: the subdirectories of
    /// `modules/`, sorted for determinism. Backs CLI allow-list validation
    /// and the interactive prompt text.
    pub fn known_modules(&self) -> Result<Vec<String>, AppError> {
        let dir = self.modules_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
