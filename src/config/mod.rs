// aliasql/src/config/mod.rs
use aliasql::AliaSqlSettings;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};
use which::which_in;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const CONFIG_PATH_ENV: &str = "ALIASQL_CONFIG";

const COMMAND_ENV: &str = "ALIASQL_COMMAND";
const CONNECTION_STRING_ENV: &str = "ALIASQL_CONNECTION_STRING";
const DATABASE_NAME_ENV: &str = "ALIASQL_DATABASE_NAME";
const SCRIPTS_FOLDER_ENV: &str = "ALIASQL_SCRIPTS_FOLDER";
const TOOL_PATH_ENV: &str = "ALIASQL_TOOL_PATH";

// Shape of config.json; every key is optional so the environment can fill the gaps.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJsonConfig {
    pub command: Option<String>,
    pub connection_string: Option<String>,
    pub database_name: Option<String>,
    pub scripts_folder: Option<PathBuf>,
    pub tool_path: Option<String>,
}

impl RawJsonConfig {
    /// Reads `config_path`. A missing file yields an empty config; a malformed one is an error.
    pub fn load_from_json(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, relying on environment");
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;
        serde_json::from_str(&config_content).with_context(|| {
            format!(
                "Failed to parse JSON from config file at {}",
                config_path.display()
            )
        })
    }

    /// Overrides keys with `ALIASQL_*` variables. Empty variables are ignored.
    pub fn apply_env_overrides<L>(mut self, lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(COMMAND_ENV) {
            self.command = Some(v);
        }
        if let Some(v) = get(CONNECTION_STRING_ENV) {
            self.connection_string = Some(v);
        }
        if let Some(v) = get(DATABASE_NAME_ENV) {
            self.database_name = Some(v);
        }
        if let Some(v) = get(SCRIPTS_FOLDER_ENV) {
            self.scripts_folder = Some(PathBuf::from(v));
        }
        if let Some(v) = get(TOOL_PATH_ENV) {
            self.tool_path = Some(v);
        }
        self
    }
}

/// Builds runner settings. `command` from the CLI wins over the one in config.
///
/// `search_path` is the PATH-style list a bare `tool_path` is looked up in.
pub fn load_settings_from_json(
    raw_config: &RawJsonConfig,
    command: Option<String>,
    working_dir: &Path,
    search_path: Option<&OsStr>,
) -> Result<AliaSqlSettings> {
    let connection_string = raw_config
        .connection_string
        .as_ref()
        .context("connection_string must be set in config.json or ALIASQL_CONNECTION_STRING")?
        .clone();
    let database_name = raw_config
        .database_name
        .as_ref()
        .context("database_name must be set in config.json or ALIASQL_DATABASE_NAME")?
        .clone();
    let scripts_folder = raw_config
        .scripts_folder
        .as_ref()
        .context("scripts_folder must be set in config.json or ALIASQL_SCRIPTS_FOLDER")?
        .clone();

    if scripts_folder.as_os_str().is_empty() {
        anyhow::bail!("scripts_folder cannot be empty in config.json.");
    }

    let command = command
        .or_else(|| raw_config.command.clone())
        .unwrap_or_default();

    Ok(AliaSqlSettings {
        command,
        connection_string,
        database_name,
        scripts_folder: Some(scripts_folder),
        tool_path: raw_config
            .tool_path
            .as_deref()
            .map(|p| resolve_configured_tool_path(p, working_dir, search_path)),
    })
}

/// A bare file name that is not in the working directory is looked up on PATH.
fn resolve_configured_tool_path(
    tool_path: &str,
    working_dir: &Path,
    search_path: Option<&OsStr>,
) -> PathBuf {
    let path = PathBuf::from(tool_path);
    let mut components = path.components();
    let is_bare_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if is_bare_name && !working_dir.join(&path).is_file() {
        if let Ok(found) = which_in(&path, search_path, working_dir) {
            tracing::debug!(path = %found.display(), "Found AliaSql on PATH");
            return found;
        }
    }
    path
}
