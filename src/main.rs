use std::process::ExitCode;

use clap::Parser;

use tca_mcp::cli::{run_command, Cli, Commands};
use tca_mcp::config::load_config;
use tca_mcp::mcp::run_server;
use tca_mcp::observability::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let project_root = std::env::current_dir().ok();
    let config = match load_config(cli.config.as_deref(), project_root.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tca-mcp: {e}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config.logging.filter);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => match run_server(config).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("server exited with error: {e}");
                ExitCode::FAILURE
            }
        },
        command => match run_command(&command, &config) {
            Ok(output) => {
                print!("{}", output.text);
                if !output.text.ends_with('\n') {
                    println!();
                }
                ExitCode::from(u8::try_from(output.exit_code).unwrap_or(1))
            }
            Err(e) => {
                eprintln!("tca-mcp: {e}");
                ExitCode::from(2)
            }
        },
    }
}
