// aliasql/src/runner/arguments.rs
use crate::process::{FileResolver, ProcessArguments};
use crate::settings::AliaSqlSettings;
use std::path::{Path, PathBuf};

/// Absolute scripts folder for a run.
///
/// # Panics
/// When `scripts_folder` is unset. A missing scripts folder is a caller bug, not a tool failure,
/// so it is kept apart from [`AliaSqlError`](crate::errors::AliaSqlError).
pub fn scripts_folder<F: FileResolver>(resolver: &F, settings: &AliaSqlSettings) -> PathBuf {
    match settings.scripts_folder.as_deref() {
        Some(folder) => resolver.resolve(folder),
        None => panic!("AliaSql: Scripts folder was not set."),
    }
}

/// AliaSQL takes exactly four positionals: command, connection string, scripts folder, database.
pub fn build_arguments(settings: &AliaSqlSettings, scripts_folder: &Path) -> ProcessArguments {
    let mut arguments = ProcessArguments::new();
    arguments
        .append(settings.command.as_str())
        .append_secret(settings.connection_string.as_str())
        .append(scripts_folder.as_os_str())
        .append(settings.database_name.as_str());
    arguments
}
