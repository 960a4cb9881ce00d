//! gasinit: scaffold Google Apps Script projects from a template installation.

pub mod clasp;
pub mod cli;
pub mod descriptor;
pub mod error;
pub mod exec;
pub mod scaffold;
pub mod template;

pub use error::AppError;
pub use scaffold::{ScaffoldOptions, ScaffoldReport};
pub use template::TemplateSource;

use exec::SystemCommandRunner;

/// Scaffold a new project from `template` with the given options.
///
/// External commands (npm, clasp) are spawned synchronously with the new
/// project root as their working directory.
pub fn startproject(
    template: &TemplateSource,
    options: &ScaffoldOptions,
) -> Result<ScaffoldReport, AppError> {
    scaffold::run(template, &SystemCommandRunner, options)
}
