// aliasql/src/runner/logic.rs
use super::arguments::{build_arguments, scripts_folder};
use super::resolve::resolve_tool_path;
use crate::errors::{AliaSqlError, Result};
use crate::process::{FileResolver, ProcessLauncher, ProcessSettings};
use crate::settings::AliaSqlSettings;
use tracing::{debug, error, info};

/// Resolve, build arguments, launch, wait, check the exit code. Each failure ends the run.
pub(super) fn perform_run<F, P>(resolver: &F, launcher: &P, settings: &AliaSqlSettings) -> Result<()>
where
    F: FileResolver,
    P: ProcessLauncher,
{
    let tool_path = resolve_tool_path(resolver, settings)?;

    let working_directory = scripts_folder(resolver, settings);
    let process_settings = ProcessSettings {
        arguments: build_arguments(settings, &working_directory),
        working_directory,
    };

    info!(
        command = %settings.command,
        database = %settings.database_name,
        "Running AliaSql"
    );
    debug!(
        "{} {} (working directory: {})",
        tool_path.display(),
        process_settings.arguments.render_safe(),
        process_settings.working_directory.display()
    );

    let mut process = launcher
        .start(&tool_path, &process_settings)
        .ok_or_else(|| AliaSqlError::ProcessNotStarted { path: tool_path.clone() })?;

    let exit_code = process.wait_for_exit()?;
    if exit_code != 0 {
        error!(exit_code, command = %settings.command, "AliaSql exited with an error");
        return Err(AliaSqlError::ProcessFailed { exit_code });
    }

    info!(command = %settings.command, "AliaSql completed successfully");
    Ok(())
}
