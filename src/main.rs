//! AliaSQL Runner
//!
//! Provides a CLI for running AliaSQL database migrations from a config file

// aliasql/src/main.rs
mod config;
mod utils;

use aliasql::{AliaSqlCommand, AliaSqlError, AliaSqlRunner};
use anyhow::{Context, Result};
use config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, RawJsonConfig, load_settings_from_json};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run_app() {
        Ok(_) => {
            println!("✅ Migration completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ Error: {:?}", e);
            ExitCode::from(exit_status_for(&e))
        }
    }
}

fn run_app() -> Result<()> {
    let config_path = env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let raw_config = RawJsonConfig::load_from_json(&config_path)
        .context(format!("Failed to load configuration from {}", config_path.display()))?
        .apply_env_overrides(|key| env::var(key).ok());

    let args: Vec<String> = env::args().collect();
    let command = match args.get(1) {
        Some(arg) => Some(arg.trim().to_string()),
        None if raw_config.command.is_some() => None,
        None => Some(prompt_command()?),
    };

    let working_dir = env::current_dir().context("Failed to read current directory")?;
    let search_path = env::var_os("PATH");
    let mut settings =
        load_settings_from_json(&raw_config, command, &working_dir, search_path.as_deref())
            .context("Failed to build AliaSql settings from configuration")?;

    let (command, warning) = normalize_command(&settings.command);
    settings.command = command;
    if let Some(warning) = warning {
        println!("{}", warning);
    }

    if let Some(scripts_folder) = &settings.scripts_folder {
        let scripts_folder = working_dir.join(scripts_folder);
        if scripts_folder.is_dir() {
            let counted = utils::count_sql_scripts(&scripts_folder);
            println!("{}", scripts_summary(&scripts_folder, counted));
        } else {
            println!(
                "⚠️  Scripts folder {} does not exist; AliaSql will likely fail.",
                scripts_folder.display()
            );
        }
    }

    println!("🚀 Running AliaSql {} against {}...", settings.command, settings.database_name);
    AliaSqlRunner::system()
        .run(&settings)
        .with_context(|| format!("AliaSql {} failed", settings.command))?;
    Ok(())
}

/// Prompts for the AliaSql command to run
///
/// Returns the user's input as String
fn prompt_command() -> Result<String> {
    use std::io::{Write, stdin, stdout};

    println!("Select an AliaSql command:");
    for (i, command) in AliaSqlCommand::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, command);
    }
    print!("Enter your choice: ");
    stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    stdin().read_line(&mut input).context("Failed to read user input")?;
    let input = input.trim();

    let by_number = input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| AliaSqlCommand::ALL.get(i));
    Ok(match by_number {
        Some(command) => command.to_string(),
        None => input.to_string(),
    })
}

/// Canonical spelling for known commands; a warning for unknown non-empty ones.
fn normalize_command(command: &str) -> (String, Option<String>) {
    match command.parse::<AliaSqlCommand>() {
        Ok(known) => (known.to_string(), None),
        Err(_) if command.is_empty() => (String::new(), None),
        Err(_) => (
            command.to_string(),
            Some(format!(
                "⚠️  '{}' is not a known AliaSql command; passing it through unchanged.",
                command
            )),
        ),
    }
}

/// Pre-flight line for the scripts folder. Counting problems only warn.
fn scripts_summary(scripts_folder: &Path, counted: Result<usize>) -> String {
    match counted {
        Ok(scripts) => format!("Found {} SQL scripts in {}", scripts, scripts_folder.display()),
        Err(e) => format!("⚠️  Could not count SQL scripts: {:#}", e),
    }
}

/// Mirrors the tool's own exit code when it ran and failed.
fn exit_status_for(error: &anyhow::Error) -> u8 {
    let tool_exit = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<AliaSqlError>())
        .and_then(AliaSqlError::exit_code);
    match tool_exit {
        Some(code) => code.clamp(1, 255) as u8,
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_follows_tool_failure() {
        let err = anyhow::Error::new(AliaSqlError::ProcessFailed { exit_code: 3 })
            .context("AliaSql Update failed");
        assert_eq!(exit_status_for(&err), 3);

        let negative = anyhow::Error::new(AliaSqlError::ProcessFailed { exit_code: -1 });
        assert_eq!(exit_status_for(&negative), 1);
    }

    #[test]
    fn test_normalize_command() {
        assert_eq!(normalize_command("update"), ("Update".to_string(), None));
        assert_eq!(normalize_command(""), (String::new(), None));

        let (command, warning) = normalize_command("migrate");
        assert_eq!(command, "migrate");
        assert!(warning.is_some_and(|w| w.contains("'migrate'")));
    }

    #[test]
    fn test_scripts_summary_warns_on_count_failure() {
        let folder = Path::new("/Working/scripts");
        assert_eq!(
            scripts_summary(folder, Ok(2)),
            "Found 2 SQL scripts in /Working/scripts"
        );

        let summary = scripts_summary(folder, Err(anyhow::anyhow!("permission denied")));
        assert!(summary.starts_with("⚠️"));
        assert!(summary.contains("permission denied"));
    }

    #[test]
    fn test_exit_code_defaults_to_failure() {
        let err = anyhow::anyhow!("connection_string must be set");
        assert_eq!(exit_status_for(&err), 1);
    }
}
