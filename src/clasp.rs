//! Deployment-config (`.clasp.json`) handling.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::template::CLASP_FILE;

/// The JSON document clasp reads to know which remote script a project syncs
/// to. Keys other than `scriptId` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    #[serde(rename = "scriptId")]
    pub script_id: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl DeploymentConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| AppError::ConfigParse {
            file: path.display().to_string(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string(self).map_err(|source| AppError::ConfigParse {
            file: path.display().to_string(),
            source,
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Pick the script ID to patch in: the dev ID wins over the primary one.
/// Empty strings count as absent.
pub fn effective_script_id<'a>(
    gas_id: Option<&'a str>,
    gas_id_dev: Option<&'a str>,
) -> Option<&'a str> {
    let non_empty = |id: Option<&'a str>| id.filter(|value| !value.is_empty());
    non_empty(gas_id_dev).or(non_empty(gas_id))
}

/// Copy the template's `.clasp.json` into `project_root` and, if a script ID
/// was supplied, rewrite its `scriptId` field. With no ID the file lands
/// byte-for-byte unmodified.
pub fn install_clasp_config(
    template_clasp: &Path,
    project_root: &Path,
    script_id: Option<&str>,
) -> Result<(), AppError> {
    let target = project_root.join(CLASP_FILE);
    fs::copy(template_clasp, &target)?;

    if let Some(id) = script_id {
        let mut config = DeploymentConfig::load(template_clasp)?;
        config.script_id = id.to_string();
        config.save(&target)?;
    }
    Ok(())
}
