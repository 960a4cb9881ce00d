//! CLI adapter: argument parsing and interactive prompts.

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};

use crate::error::AppError;
use crate::scaffold::{ScaffoldOptions, resolve_project_path};
use crate::template::TemplateSource;

#[derive(Parser)]
#[command(name = "gasinit")]
#[command(version)]
#[command(
    about = "Scaffold Google Apps Script projects from a template installation",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new GAS project
    #[clap(visible_alias = "sp")]
    Startproject(StartProjectArgs),
}

#[derive(Args)]
pub struct StartProjectArgs {
    /// Project name
    #[arg(short = 'n', long)]
    project_name: Option<String>,

    /// Target path; a bare name resolves under the current directory
    #[arg(short = 'p', long)]
    project_path: Option<String>,

    /// GAS script ID
    #[arg(long)]
    gas_id: Option<String>,

    /// GAS script ID for dev (takes precedence when patching .clasp.json)
    #[arg(long)]
    gas_id_dev: Option<String>,

    /// Module to copy from the template (repeatable)
    #[arg(short = 'm', long = "add-module")]
    add_module: Vec<String>,

    /// Template installation directory (defaults to $GASINIT_TEMPLATE_DIR)
    #[arg(long)]
    template_dir: Option<PathBuf>,

    /// Proceed even when the target directory already exists
    #[arg(short = 'f', long)]
    force_directory: bool,

    /// Copy the template's app/ skeleton into the app subdirectory
    #[arg(long)]
    with_app_skeleton: bool,

    /// Run the npm/clasp install command sequence after scaffolding
    #[arg(long)]
    install: bool,

    /// Run `clasp pull` after patching the deployment config
    #[arg(long)]
    pull: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Startproject(args) => run_startproject(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_startproject(args: StartProjectArgs) -> Result<(), AppError> {
    let template = TemplateSource::discover(args.template_dir.clone())?;

    let Some(options) = resolve_inputs(args, &template, &DialoguerPrompter)? else {
        // Prompt cancelled.
        return Ok(());
    };

    match crate::startproject(&template, &options) {
        Ok(report) => {
            println!("✅ Created project at {}", report.project_root.display());
            if !report.copied_modules.is_empty() {
                println!("   Modules: {}", report.copied_modules.join(", "));
            }
            for name in &report.skipped_modules {
                println!("   Skipped unknown module '{}'", name);
            }
            Ok(())
        }
        // Normal, logged outcome rather than a failure.
        Err(AppError::ProjectExists(path)) => {
            println!("Project directory already exists: {}", path);
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Seam for interactive input, so flag-or-prompt resolution is testable
/// without a terminal.
trait Prompter {
    /// Prompt for a required value.
    fn input(&self, text: &str) -> Result<Option<String>, AppError>;
    /// Prompt for a value the user may leave empty.
    fn input_allow_empty(&self, text: &str) -> Result<Option<String>, AppError>;
}

/// Terminal-backed prompter.
struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn input(&self, text: &str) -> Result<Option<String>, AppError> {
        read_input(Input::new().with_prompt(text))
    }

    fn input_allow_empty(&self, text: &str) -> Result<Option<String>, AppError> {
        read_input(Input::new().with_prompt(text).allow_empty(true))
    }
}

/// Resolve each input from its flag if present, otherwise prompt. Returns
/// `None` when the user cancels a prompt.
fn resolve_inputs(
    args: StartProjectArgs,
    template: &TemplateSource,
    prompter: &dyn Prompter,
) -> Result<Option<ScaffoldOptions>, AppError> {
    let known = template.known_modules()?;
    validate_modules(&args.add_module, &known)?;

    let project_name = match args.project_name {
        Some(value) => value,
        None => match prompter.input("Enter a project name")? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let project_path_raw = match args.project_path {
        Some(value) => value,
        None => match prompter.input("Enter directory path")? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let modules = if args.add_module.is_empty() {
        let text = format!(
            "Enter modules separated by comma. Modules allowed: {}.\nModules",
            known.join(", ")
        );
        match prompter.input_allow_empty(&text)? {
            Some(value) => split_module_list(&value),
            None => return Ok(None),
        }
    } else {
        args.add_module
    };

    if project_name.trim().is_empty() {
        return Err(AppError::validation("Project name must not be empty"));
    }
    if project_path_raw.trim().is_empty() {
        return Err(AppError::validation("Project path must not be empty"));
    }

    let cwd = std::env::current_dir()?;
    let project_path = resolve_project_path(&project_path_raw, &cwd);

    Ok(Some(ScaffoldOptions {
        project_name,
        project_path,
        gas_id: args.gas_id,
        gas_id_dev: args.gas_id_dev,
        modules,
        force_directory: args.force_directory,
        with_app_skeleton: args.with_app_skeleton,
        install: args.install,
        pull: args.pull,
    }))
}

/// Flag-supplied module names must come from the template's allow-list.
/// (Prompted names are forgiving: unknown ones are skipped during copy.)
fn validate_modules(requested: &[String], known: &[String]) -> Result<(), AppError> {
    for name in requested {
        let trimmed = name.trim();
        if !known.iter().any(|k| k == trimmed) {
            return Err(AppError::validation(format!(
                "Unknown module '{}'. Available: {}",
                trimmed,
                known.join(", ")
            )));
        }
    }
    Ok(())
}

fn split_module_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

fn read_input(input: Input<'_, String>) -> Result<Option<String>, AppError> {
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::validation(format!("Failed to read input: {}", err))),
    }
}
