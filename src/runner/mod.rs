mod arguments;
mod logic;
mod resolve;

use crate::errors::Result;
use crate::process::{FileResolver, ProcessLauncher, SystemProcessLauncher, WorkingRoot};
use crate::settings::AliaSqlSettings;

pub use self::arguments::build_arguments;
pub use self::resolve::{DEFAULT_TOOL_PATH, resolve_tool_path};

/// Locates the AliaSQL executable, runs it once per call, and turns the outcome into a `Result`.
#[derive(Debug, Clone)]
pub struct AliaSqlRunner<F, P> {
    resolver: F,
    launcher: P,
}

impl<F, P> AliaSqlRunner<F, P>
where
    F: FileResolver,
    P: ProcessLauncher,
{
    pub fn new(resolver: F, launcher: P) -> Self {
        Self { resolver, launcher }
    }

    /// Runs AliaSQL with the given settings and blocks until it exits.
    ///
    /// # Errors
    /// [`ToolNotFound`](crate::errors::AliaSqlError::ToolNotFound) when no executable exists at
    /// the configured or default path, [`ProcessNotStarted`](crate::errors::AliaSqlError::ProcessNotStarted)
    /// when the launcher could not start it, and
    /// [`ProcessFailed`](crate::errors::AliaSqlError::ProcessFailed) on a non-zero exit code.
    ///
    /// # Panics
    /// When `settings.scripts_folder` is unset and the executable was found.
    pub fn run(&self, settings: &AliaSqlSettings) -> Result<()> {
        logic::perform_run(&self.resolver, &self.launcher, settings)
    }

    /// Runs `command` with otherwise unchanged settings.
    pub fn run_command(&self, command: impl Into<String>, settings: AliaSqlSettings) -> Result<()> {
        self.run(&settings.with_command(command))
    }
}

impl AliaSqlRunner<WorkingRoot, SystemProcessLauncher> {
    /// Runner anchored at the current directory that spawns real processes.
    pub fn system() -> Self {
        Self::new(WorkingRoot::current(), SystemProcessLauncher)
    }
}

/// Runs `command` with otherwise unchanged settings against the real system.
pub fn alia_sql(command: impl Into<String>, settings: AliaSqlSettings) -> Result<()> {
    AliaSqlRunner::system().run_command(command, settings)
}
