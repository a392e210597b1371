use clap::Parser;

use lighthouse_utils::logger;

mod utils;
mod error;
mod config;
mod models;
mod gateway;
mod commands;
mod presenter;

use error::CliError;
use models::Cli;
use config::{DashboardConfig, UserConfig};

async fn execute_args(args: &Cli) -> Result<(), CliError> {
  let config = DashboardConfig::new(args, UserConfig::new())?;
  commands::exec_dashboard(&config).await
}

#[ntex::main]
async fn main() -> std::io::Result<()> {
  logger::enable_logger("lighthouse");
  let args = Cli::parse();
  if let Err(err) = execute_args(&args).await {
    err.exit();
  }
  Ok(())
}
