//! The OS-facing collaborators the runner depends on.
//!
//! The runner never touches the filesystem or spawns processes itself; it goes through
//! [`FileResolver`] and [`ProcessLauncher`] so both can be swapped for fakes in tests.

pub(crate) mod arguments;
pub(crate) mod system;

use crate::errors::Result;
use std::path::{Path, PathBuf};

pub use arguments::ProcessArguments;
pub use system::{SystemProcessLauncher, WorkingRoot, make_absolute};

/// Anchors relative paths at the current working root and probes for files.
pub trait FileResolver {
    /// Returns `path` unchanged when it is already rooted, otherwise joined onto the working root.
    fn resolve(&self, path: &Path) -> PathBuf;

    fn exists(&self, path: &Path) -> bool;
}

/// A started child process.
pub trait ProcessHandle {
    /// Blocks until the process terminates and returns its exit code.
    fn wait_for_exit(&mut self) -> Result<i32>;
}

/// Starts processes. `None` means the process could not be started at all.
pub trait ProcessLauncher {
    fn start(&self, executable: &Path, settings: &ProcessSettings) -> Option<Box<dyn ProcessHandle>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSettings {
    pub arguments: ProcessArguments,
    pub working_directory: PathBuf,
}
