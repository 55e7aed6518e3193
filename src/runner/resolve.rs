// aliasql/src/runner/resolve.rs
use crate::errors::{AliaSqlError, Result};
use crate::process::FileResolver;
use crate::settings::AliaSqlSettings;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where AliaSQL lands when restored as a build tool package.
pub const DEFAULT_TOOL_PATH: &str = "./tools/AliaSQL/tools/AliaSQL.exe";

/// Picks the configured tool path (or the default one), anchors it at the working root,
/// and fails if nothing exists there.
pub fn resolve_tool_path<F: FileResolver>(resolver: &F, settings: &AliaSqlSettings) -> Result<PathBuf> {
    let candidate = settings
        .tool_path
        .as_deref()
        .unwrap_or_else(|| Path::new(DEFAULT_TOOL_PATH));
    let resolved = resolver.resolve(candidate);

    if !resolver.exists(&resolved) {
        debug!(path = %resolved.display(), "AliaSql executable not found");
        return Err(AliaSqlError::ToolNotFound { path: resolved });
    }

    debug!(path = %resolved.display(), "Resolved AliaSql executable");
    Ok(resolved)
}
