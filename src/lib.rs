//! Runs the AliaSQL database migration tool as a child process.
//!
//! Build tooling hands an [`AliaSqlSettings`] to an [`AliaSqlRunner`], which finds the executable,
//! passes it command, connection string, scripts folder and database name, and reports a failed
//! start or a non-zero exit code as an [`AliaSqlError`].

pub mod errors;
pub mod process;
pub mod runner;
pub mod settings;

pub use errors::{AliaSqlError, Result};
pub use runner::{AliaSqlRunner, alia_sql};
pub use settings::{AliaSqlCommand, AliaSqlSettings};
