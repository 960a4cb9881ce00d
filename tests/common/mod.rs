//! Shared testing utilities for gasinit CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated template installation and work
/// directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    template_dir: PathBuf,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with a populated template fixture.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let template_dir = root.path().join("template");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&template_dir).expect("Failed to create template directory");
        fs::create_dir_all(&work_dir).expect("Failed to create work directory");

        let ctx = Self { root, template_dir, work_dir };
        ctx.populate_template();
        ctx
    }

    fn populate_template(&self) {
        let base_files =
            [".eslintrc.js", "tsconfig.json", ".claspignore", "Settings.ts", "init_node.bash"];
        for name in base_files {
            fs::write(self.template_dir.join(name), format!("// template {}\n", name))
                .expect("Failed to write template file");
        }
        fs::write(
            self.template_dir.join(".clasp.json"),
            r#"{"scriptId":"template-id","rootDir":"./"}"#,
        )
        .expect("Failed to write template .clasp.json");

        let modules = self.template_dir.join("modules");
        fs::create_dir_all(modules.join("sheets")).unwrap();
        fs::write(modules.join("sheets").join("Sheets.ts"), "export class Sheets {}\n").unwrap();
        fs::create_dir_all(modules.join("drive")).unwrap();
        fs::write(modules.join("drive").join("Drive.ts"), "export class Drive {}\n").unwrap();
        fs::write(modules.join("interfaces.ts"), "export interface Module {}\n").unwrap();

        let app = self.template_dir.join("app");
        fs::create_dir_all(&app).unwrap();
        fs::write(app.join("Main.ts"), "function main() {}\n").unwrap();
    }

    /// Path to the template installation fixture.
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Path to the directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path a project named `name` lands at when given as a bare path.
    pub fn project_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Build a command for invoking the compiled `gasinit` binary with the
    /// template fixture wired up via the environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gasinit").expect("Failed to locate gasinit binary");
        cmd.current_dir(&self.work_dir).env("GASINIT_TEMPLATE_DIR", &self.template_dir);
        cmd
    }

    /// Run `startproject` with the standard flags for `name`, plus extras.
    pub fn startproject(&self, name: &str, path: &str, extra: &[&str]) -> Command {
        let mut cmd = self.cli();
        cmd.args(["startproject", "--project-name", name, "--project-path", path]);
        cmd.args(extra);
        cmd
    }

    /// Assert the standard scaffold layout exists for a project.
    pub fn assert_project_layout(&self, project: &Path, app_dir_name: &str) {
        assert!(project.is_dir(), "project root should exist");
        assert!(project.join(app_dir_name).is_dir(), "app directory should exist");
        assert!(project.join("gasproject.json").is_file(), "descriptor should exist");
        assert!(project.join(".clasp.json").is_file(), ".clasp.json should exist");
        for name in [".eslintrc.js", "tsconfig.json", ".claspignore", "Settings.ts", "init_node.bash"]
        {
            assert!(project.join(name).is_file(), "{} should be copied", name);
        }
    }

    /// Read the descriptor JSON from a scaffolded project.
    pub fn read_descriptor(&self, project: &Path) -> serde_json::Value {
        let content =
            fs::read_to_string(project.join("gasproject.json")).expect("Failed to read descriptor");
        serde_json::from_str(&content).expect("Descriptor should be valid JSON")
    }

    /// Read the deployment config from a scaffolded project.
    pub fn read_clasp(&self, project: &Path) -> serde_json::Value {
        let content =
            fs::read_to_string(project.join(".clasp.json")).expect("Failed to read .clasp.json");
        serde_json::from_str(&content).expect(".clasp.json should be valid JSON")
    }
}
