//! Command-line interface.
//!
//! `tca-mcp` with no subcommand (or `serve`) runs the MCP server on stdio.
//! The other subcommands print the same text the matching tool returns, for
//! use from a terminal or a script.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog;
use crate::config::schema::TcaMcpConfig;
use crate::error::Result;
use crate::lint::{Linter, Severity};
use crate::mcp::tools;

#[derive(Parser, Debug)]
#[command(
    name = "tca-mcp",
    version,
    about = "Composable Architecture docs, templates and lint over MCP"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a YAML config file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the MCP server on stdin/stdout (default).
    Serve,
    /// List documentation topics, or search them when a query is given.
    Docs { query: Option<String> },
    /// Print a documentation topic.
    Read { key: String },
    /// Print a feature template (counter, api-call, list, timer).
    Template { name: String },
    /// Lint a Swift file; pass `-` to read stdin.
    Lint { file: PathBuf },
    /// Print a reducer scaffold for <NAME>Feature.
    Generate {
        name: String,
        #[arg(long, default_value_t = false)]
        effects: bool,
    },
}

/// Output of a one-shot command: text for stdout and the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self { text, exit_code: 0 }
    }
}

/// Run a non-server subcommand. `Serve` is handled by the binary.
pub fn run_command(command: &Commands, config: &TcaMcpConfig) -> Result<CommandOutput> {
    let output = match command {
        Commands::Serve => CommandOutput::ok(String::new()),
        Commands::Docs { query } => {
            CommandOutput::ok(tools::handle_search_docs(query.as_deref().unwrap_or("")))
        }
        Commands::Read { key } => match catalog::read_doc(key) {
            Ok(entry) => CommandOutput::ok(entry.content.to_string()),
            Err(e) => CommandOutput {
                text: e.to_string(),
                exit_code: 1,
            },
        },
        Commands::Template { name } => CommandOutput::ok(tools::handle_get_template(name)),
        Commands::Lint { file } => {
            let source = read_source(file)?;
            let findings = Linter::from_config(config).lint(&source);
            let has_errors = findings.iter().any(|f| f.severity == Severity::Error);
            CommandOutput {
                text: crate::lint::format_findings(&findings),
                exit_code: i32::from(has_errors),
            }
        }
        Commands::Generate { name, effects } => {
            CommandOutput::ok(tools::handle_generate_reducer(name, *effects))
        }
    };
    Ok(output)
}

fn read_source(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}
