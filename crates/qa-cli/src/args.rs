use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use qa_core::generator::CredentialKind;

use crate::cli::{ExecCommands, GenCommands};

/// Command-line QA assistant
///
/// Generates test cases with a language model, tracks their execution
/// (pass, fail, blocked, skipped) in a persistent session, and produces
/// execution summaries and standalone QA documents such as test plans and
/// bug reports.
#[derive(Parser)]
#[command(version, about, name = "qa")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/qa-assistant/qa.db
    #[arg(long, global = true, env = "QA_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Completion endpoint URL
    #[arg(long, global = true, env = "QA_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Model name sent with every request
    #[arg(long, global = true, env = "QA_MODEL")]
    pub model: Option<String>,

    /// API key, used only in direct credential mode
    #[arg(long, global = true, env = "QA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Whether a proxy holds the API key or the client sends it itself
    #[arg(
        long,
        global = true,
        env = "QA_CREDENTIAL_MODE",
        value_enum,
        default_value_t = CredentialModeArg::Proxy
    )]
    pub credential_mode: CredentialModeArg,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// - `exec`: run a test execution session (the default shows the session)
/// - `gen`: generate a standalone QA document
#[derive(Subcommand)]
pub enum Commands {
    /// Generate and execute test cases
    #[command(alias = "e")]
    Exec {
        #[command(subcommand)]
        command: ExecCommands,
    },
    /// Generate standalone QA documents
    #[command(alias = "g")]
    Gen {
        #[command(subcommand)]
        command: GenCommands,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CredentialModeArg {
    /// A proxy injects the API key
    Proxy,
    /// Send the API key directly
    Direct,
}

impl From<CredentialModeArg> for CredentialKind {
    fn from(val: CredentialModeArg) -> Self {
        match val {
            CredentialModeArg::Proxy => CredentialKind::Proxy,
            CredentialModeArg::Direct => CredentialKind::Direct,
        }
    }
}
