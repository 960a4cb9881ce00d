//! Scoped external-process invocation.
//!
//! Every command runs synchronously in an explicit working directory; exit
//! status and output are captured and non-zero exits surface as
//! [`AppError::CommandFailed`]. The process-wide current directory is never
//! touched.

use std::path::Path;
use std::process::Command;

use crate::error::AppError;

/// Tooling commands run after scaffolding when `--install` is given, in
/// order, stopping on the first failure.
pub const INSTALL_COMMANDS: [&[&str]; 5] = [
    &["npm", "init", "-y"],
    &["npm", "install", "-g", "@google/clasp"],
    &["npm", "install", "-g", "typescript"],
    &["npm", "i", "-S", "@types/google-apps-script"],
    &[
        "npm",
        "install",
        "eslint",
        "eslint-config-airbnb-typescript",
        "eslint-plugin-import@^2.22.0",
        "@typescript-eslint/eslint-plugin@^4.4.1",
        "--save-dev",
    ],
];

/// Fetch remote script sources into the project.
pub const CLASP_PULL: &[&str] = &["clasp", "pull"];

/// Seam for spawning external collaborators (npm, clasp).
pub trait CommandRunner {
    /// Run `argv` in `cwd`, returning captured stdout on success.
    fn run(&self, argv: &[&str], cwd: &Path) -> Result<String, AppError>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, argv: &[&str], cwd: &Path) -> Result<String, AppError> {
        let display = argv.join(" ");
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| AppError::validation("Empty command line"))?;

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| AppError::CommandFailed {
                command: display.clone(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::CommandFailed {
                command: display,
                details: if stderr.is_empty() { output.status.to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
