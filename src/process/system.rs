// aliasql/src/process/system.rs
use super::{FileResolver, ProcessHandle, ProcessLauncher, ProcessSettings};
use crate::errors::Result;
use std::path::{Component, Path, PathBuf};
use std::process::{Child, Command};
use tracing::{debug, warn};

/// Resolves paths against a fixed root directory and checks the real filesystem.
#[derive(Debug, Clone)]
pub struct WorkingRoot {
    root: PathBuf,
}

impl WorkingRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Uses the process current directory, falling back to `.` if it cannot be read.
    pub fn current() -> Self {
        let root = std::env::current_dir().unwrap_or_else(|e| {
            warn!(error = %e, "Could not read current directory, resolving against '.'");
            PathBuf::from(".")
        });
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileResolver for WorkingRoot {
    fn resolve(&self, path: &Path) -> PathBuf {
        make_absolute(&self.root, path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Joins `path` onto `root` unless it is already rooted, dropping `.` and folding `..` lexically.
///
/// Drive-letter paths such as `C:/tools/x.exe` count as rooted on every platform.
pub fn make_absolute(root: &Path, path: &Path) -> PathBuf {
    if is_rooted(path) {
        return path.to_path_buf();
    }
    let mut resolved = root.to_path_buf();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if resolved.parent().is_some() {
                    resolved.pop();
                }
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

fn is_rooted(path: &Path) -> bool {
    if path.has_root() || path.is_absolute() {
        return true;
    }
    let raw = path.to_string_lossy();
    let bytes = raw.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Spawns real child processes with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessLauncher;

impl ProcessLauncher for SystemProcessLauncher {
    fn start(&self, executable: &Path, settings: &ProcessSettings) -> Option<Box<dyn ProcessHandle>> {
        debug!(
            "Spawning {} {} in {}",
            executable.display(),
            settings.arguments.render_safe(),
            settings.working_directory.display()
        );
        match Command::new(executable)
            .args(settings.arguments.values())
            .current_dir(&settings.working_directory)
            .spawn()
        {
            Ok(child) => Some(Box::new(SystemProcess { child })),
            Err(e) => {
                warn!(executable = %executable.display(), error = %e, "Failed to spawn process");
                None
            }
        }
    }
}

struct SystemProcess {
    child: Child,
}

impl ProcessHandle for SystemProcess {
    fn wait_for_exit(&mut self) -> Result<i32> {
        let status = self.child.wait()?;
        // No code means the child was killed by a signal.
        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_make_absolute_strips_current_dir() {
        let resolved = make_absolute(
            Path::new("/Working"),
            Path::new("./tools/AliaSQL/tools/AliaSQL.exe"),
        );
        assert_eq!(resolved, PathBuf::from("/Working/tools/AliaSQL/tools/AliaSQL.exe"));
    }

    #[test]
    fn test_make_absolute_keeps_rooted_paths() {
        assert_eq!(
            make_absolute(Path::new("/Working"), Path::new("C:/AliaSql/AliaSql.exe")),
            PathBuf::from("C:/AliaSql/AliaSql.exe")
        );
        assert_eq!(
            make_absolute(Path::new("/Working"), Path::new("/opt/aliasql/AliaSQL.exe")),
            PathBuf::from("/opt/aliasql/AliaSQL.exe")
        );
    }

    #[test]
    fn test_make_absolute_folds_parent_dir() {
        let resolved = make_absolute(Path::new("/Working/build"), Path::new("../scripts"));
        assert_eq!(resolved, PathBuf::from("/Working/scripts"));
    }

    #[test]
    fn test_current_working_root_is_process_directory() -> anyhow::Result<()> {
        let root = WorkingRoot::current();
        assert_eq!(root.root(), std::env::current_dir()?.as_path());
        assert_eq!(
            root.resolve(Path::new("scripts")),
            std::env::current_dir()?.join("scripts")
        );
        Ok(())
    }

    #[test]
    fn test_working_root_exists_checks_files_only() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let exe = dir.path().join("AliaSQL.exe");
        std::fs::write(&exe, b"")?;

        let root = WorkingRoot::new(dir.path());
        assert!(root.exists(&root.resolve(Path::new("AliaSQL.exe"))));
        assert!(!root.exists(&root.resolve(Path::new("missing.exe"))));
        assert!(!root.exists(dir.path()));
        Ok(())
    }

    #[test]
    fn test_system_launcher_returns_none_for_missing_executable() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let settings = ProcessSettings {
            arguments: crate::process::ProcessArguments::new(),
            working_directory: dir.path().to_path_buf(),
        };
        let handle = SystemProcessLauncher.start(&dir.path().join("no-such-tool"), &settings);
        assert!(handle.is_none());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_system_launcher_reports_exit_code() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let mut arguments = crate::process::ProcessArguments::new();
        arguments.append("-c").append("exit 3");
        let settings = ProcessSettings {
            arguments,
            working_directory: dir.path().to_path_buf(),
        };
        let mut handle = SystemProcessLauncher
            .start(Path::new("/bin/sh"), &settings)
            .ok_or_else(|| anyhow::anyhow!("sh did not start"))?;
        assert_eq!(handle.wait_for_exit()?, 3);
        Ok(())
    }
}
