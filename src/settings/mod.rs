// aliasql/src/settings/mod.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Everything needed for one AliaSQL invocation.
///
/// Nothing is validated here; the runner checks what it needs when it consumes the settings.
#[derive(Clone, Default, PartialEq)]
pub struct AliaSqlSettings {
    pub command: String,
    pub connection_string: String,
    pub database_name: String,
    pub scripts_folder: Option<PathBuf>,
    /// Explicit executable location. When unset, `tools/AliaSQL/tools/AliaSQL.exe`
    /// under the working root is used.
    pub tool_path: Option<PathBuf>,
}

impl AliaSqlSettings {
    pub fn new(
        command: impl Into<String>,
        connection_string: impl Into<String>,
        database_name: impl Into<String>,
        scripts_folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            command: command.into(),
            connection_string: connection_string.into(),
            database_name: database_name.into(),
            scripts_folder: Some(scripts_folder.into()),
            tool_path: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_tool_path(mut self, tool_path: impl Into<PathBuf>) -> Self {
        self.tool_path = Some(tool_path.into());
        self
    }

    pub fn with_scripts_folder(mut self, scripts_folder: impl Into<PathBuf>) -> Self {
        self.scripts_folder = Some(scripts_folder.into());
        self
    }
}

impl fmt::Debug for AliaSqlSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Connection strings routinely carry passwords.
        let connection_string = if self.connection_string.is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        f.debug_struct("AliaSqlSettings")
            .field("command", &self.command)
            .field("connection_string", &connection_string)
            .field("database_name", &self.database_name)
            .field("scripts_folder", &self.scripts_folder)
            .field("tool_path", &self.tool_path)
            .finish()
    }
}

/// Sub-commands understood by AliaSQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliaSqlCommand {
    Create,
    Update,
    Rebuild,
    TestData,
    Baseline,
    Drop,
}

impl AliaSqlCommand {
    pub const ALL: [AliaSqlCommand; 6] = [
        AliaSqlCommand::Create,
        AliaSqlCommand::Update,
        AliaSqlCommand::Rebuild,
        AliaSqlCommand::TestData,
        AliaSqlCommand::Baseline,
        AliaSqlCommand::Drop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AliaSqlCommand::Create => "Create",
            AliaSqlCommand::Update => "Update",
            AliaSqlCommand::Rebuild => "Rebuild",
            AliaSqlCommand::TestData => "TestData",
            AliaSqlCommand::Baseline => "Baseline",
            AliaSqlCommand::Drop => "Drop",
        }
    }
}

impl fmt::Display for AliaSqlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AliaSqlCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AliaSqlCommand::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown AliaSql command: '{}'", wanted))
    }
}

impl From<AliaSqlCommand> for String {
    fn from(command: AliaSqlCommand) -> Self {
        command.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_have_no_paths() {
        let settings = AliaSqlSettings::default();
        assert!(settings.command.is_empty());
        assert_eq!(settings.scripts_folder, None);
        assert_eq!(settings.tool_path, None);
    }

    #[test]
    fn test_builder_sets_fields() {
        let settings = AliaSqlSettings::new("Update", "Server=.;", "app", "/Working/scripts")
            .with_tool_path("C:/AliaSql/AliaSql.exe")
            .with_command(AliaSqlCommand::Rebuild);
        assert_eq!(settings.command, "Rebuild");
        assert_eq!(settings.database_name, "app");
        assert_eq!(settings.scripts_folder, Some(PathBuf::from("/Working/scripts")));
        assert_eq!(settings.tool_path, Some(PathBuf::from("C:/AliaSql/AliaSql.exe")));
    }

    #[test]
    fn test_debug_hides_connection_string() {
        let settings = AliaSqlSettings::new("Update", "Server=db;Password=hunter2", "app", "/s");
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_command_parsing_is_case_insensitive() {
        assert_eq!("testdata".parse::<AliaSqlCommand>(), Ok(AliaSqlCommand::TestData));
        assert_eq!(" UPDATE ".parse::<AliaSqlCommand>(), Ok(AliaSqlCommand::Update));
        assert!("migrate".parse::<AliaSqlCommand>().is_err());
    }
}
