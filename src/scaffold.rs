//! Sequential scaffold pipeline: guard, directory tree, descriptor, modules,
//! boilerplate, deployment config, artifact relocation.
//!
//! There is no rollback. A failed run may leave a partial tree; a retry with
//! `force_directory` overwrites file-by-file (copy-and-replace, not
//! merge-and-diff).

use std::fs;
use std::path::{Path, PathBuf};

use crate::clasp;
use crate::descriptor::ProjectDescriptor;
use crate::error::AppError;
use crate::exec::{CLASP_PULL, CommandRunner, INSTALL_COMMANDS};
use crate::template::{
    APP_SKELETON_DIR, BASE_FILES, CLASP_FILE, INTERFACES_FILE, MODULES_DIR, TemplateSource,
};

/// Resolved inputs for one scaffold run. Optional pipeline steps are
/// explicit flags rather than forked code paths.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub project_name: String,
    pub project_path: PathBuf,
    pub gas_id: Option<String>,
    pub gas_id_dev: Option<String>,
    pub modules: Vec<String>,
    /// Proceed even when the target directory already exists.
    pub force_directory: bool,
    /// Copy the template's `app/` skeleton into the app subdirectory.
    pub with_app_skeleton: bool,
    /// Run the npm/tool install sequence after copying files.
    pub install: bool,
    /// Run `clasp pull` after patching the deployment config.
    pub pull: bool,
}

/// What a scaffold run produced, for user-facing summary output.
#[derive(Debug, Default, Clone)]
pub struct ScaffoldReport {
    pub project_root: PathBuf,
    pub app_dir: PathBuf,
    pub copied_modules: Vec<String>,
    pub skipped_modules: Vec<String>,
    pub relocated_artifacts: Vec<String>,
}

/// Resolve a raw project-path argument: a bare name (no separator) lands
/// under `cwd`, anything else is used as given.
pub fn resolve_project_path(raw: &str, cwd: &Path) -> PathBuf {
    if raw.contains(std::path::MAIN_SEPARATOR) || raw.contains('/') {
        PathBuf::from(raw)
    } else {
        cwd.join(raw)
    }
}

/// Execute the full pipeline against a template installation.
pub fn run(
    template: &TemplateSource,
    runner: &dyn CommandRunner,
    options: &ScaffoldOptions,
) -> Result<ScaffoldReport, AppError> {
    if options.project_name.is_empty() {
        return Err(AppError::validation("Project name must not be empty"));
    }
    if options.project_path.as_os_str().is_empty() {
        return Err(AppError::validation("Project path must not be empty"));
    }
    if options.project_path.exists() && !options.force_directory {
        return Err(AppError::ProjectExists(options.project_path.display().to_string()));
    }

    let descriptor = ProjectDescriptor {
        project_name: options.project_name.clone(),
        project_path: options.project_path.display().to_string(),
        gas_id: options.gas_id.clone(),
        gas_id_dev: options.gas_id_dev.clone(),
        modules: trimmed_modules(&options.modules),
    };

    let project_root = options.project_path.clone();
    let app_dir = project_root.join(descriptor.app_dir_name());
    if !project_root.exists() {
        fs::create_dir_all(&project_root)?;
    }
    if !app_dir.exists() {
        fs::create_dir(&app_dir)?;
    }

    descriptor.write_to(&project_root)?;

    let mut report = ScaffoldReport {
        project_root: project_root.clone(),
        app_dir: app_dir.clone(),
        ..ScaffoldReport::default()
    };

    if !descriptor.modules.is_empty() {
        copy_modules(template, &project_root, &descriptor.modules, &mut report)?;
    }

    for name in BASE_FILES {
        let source = template.base_file(name);
        if !source.is_file() {
            return Err(AppError::TemplateMissing(name.to_string()));
        }
        fs::copy(&source, project_root.join(name))?;
    }

    if options.with_app_skeleton {
        let skeleton = template.app_skeleton_dir();
        if !skeleton.is_dir() {
            return Err(AppError::TemplateMissing(APP_SKELETON_DIR.to_string()));
        }
        copy_dir_recursive(&skeleton, &app_dir)?;
    }

    if options.install {
        for argv in INSTALL_COMMANDS {
            runner.run(argv, &project_root)?;
        }
    }

    let template_clasp = template.clasp_file();
    if !template_clasp.is_file() {
        return Err(AppError::TemplateMissing(CLASP_FILE.to_string()));
    }
    let script_id =
        clasp::effective_script_id(options.gas_id.as_deref(), options.gas_id_dev.as_deref());
    clasp::install_clasp_config(&template_clasp, &project_root, script_id)?;

    // Without a supplied script ID the copied config still points at the
    // template's own script, so there is nothing valid to pull.
    if options.pull && script_id.is_some() {
        runner.run(CLASP_PULL, &project_root)?;
    }

    relocate_js_artifacts(&project_root, &app_dir, &mut report)?;

    Ok(report)
}

fn trimmed_modules(modules: &[String]) -> Vec<String> {
    modules
        .iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

fn copy_modules(
    template: &TemplateSource,
    project_root: &Path,
    modules: &[String],
    report: &mut ScaffoldReport,
) -> Result<(), AppError> {
    let target_dir = project_root.join(MODULES_DIR);
    if !target_dir.exists() {
        fs::create_dir(&target_dir)?;
    }

    let interfaces = template.interfaces_file();
    if !interfaces.is_file() {
        return Err(AppError::TemplateMissing(INTERFACES_FILE.to_string()));
    }
    fs::copy(&interfaces, target_dir.join(INTERFACES_FILE))?;

    for name in modules {
        let source = template.module_dir(name);
        // Unknown module names are skipped, not errors.
        if source.is_dir() {
            copy_dir_recursive(&source, &target_dir.join(name))?;
            report.copied_modules.push(name.clone());
        } else {
            report.skipped_modules.push(name.clone());
        }
    }
    Ok(())
}

fn copy_dir_recursive(source: &Path, target: &Path) -> Result<(), AppError> {
    fs::create_dir_all(target)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let dest = target.join(entry.file_name());
        if entry.path().is_dir() {
            copy_dir_recursive(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), dest)?;
        }
    }
    Ok(())
}

/// Move generated `.js` build artifacts out of the project root into the app
/// directory. Boilerplate members of [`BASE_FILES`] stay put.
fn relocate_js_artifacts(
    project_root: &Path,
    app_dir: &Path,
    report: &mut ScaffoldReport,
) -> Result<(), AppError> {
    for entry in fs::read_dir(project_root)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(".js") && !BASE_FILES.contains(&name.as_str()) {
            fs::rename(entry.path(), app_dir.join(&name))?;
            report.relocated_artifacts.push(name);
        }
    }
    report.relocated_artifacts.sort();
    Ok(())
}
