//! Smart farming admin console.
//!
//! ```bash
//! farm-console tenants list
//! farm-console --base-url https://api.smartfarm.example plans create --name Basic ...
//! farm-console --config farm.yaml --print-config
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod commands;
mod config;
mod logging;
mod notifier;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use admin_console::AdminConsole;
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::commands::landing::LandingArgs;
use crate::commands::plans::PlanCommand;
use crate::commands::tenants::TenantCommand;
use crate::config::{AppConfig, CliOverrides};
use crate::notifier::ConsoleNotifier;

/// Smart farming admin console
#[derive(Parser)]
#[command(name = "farm-console")]
#[command(about = "Manage tenants and subscription plans of the smart farming platform")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Platform API base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage tenants
    #[command(subcommand)]
    Tenants(TenantCommand),
    /// Manage subscription plans
    #[command(subcommand)]
    Plans(PlanCommand),
    /// Show landing page content
    Landing(LandingArgs),
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    if let Some(path) = &cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (FARM__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        base_url: cli.base_url.as_deref(),
        verbose: cli.verbose,
    });

    logging::init_logging(&config.logging);

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(ExitCode::SUCCESS);
    }

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => check_config(&config),
        command => {
            config.validate()?;
            tracing::debug!(base_url = %config.api.base_url, "farm console starting");
            dispatch(command, &config).await
        }
    }
}

async fn dispatch(command: Commands, config: &AppConfig) -> Result<ExitCode> {
    match command {
        Commands::Tenants(cmd) => Ok(commands::tenants::run(cmd, &build_console(config)?).await),
        Commands::Plans(cmd) => Ok(commands::plans::run(cmd, &build_console(config)?).await),
        Commands::Landing(args) => {
            commands::landing::run(args, config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => check_config(config),
    }
}

fn build_console(config: &AppConfig) -> Result<AdminConsole> {
    let client = config.api.http_client()?;
    Ok(AdminConsole::new(
        client,
        &config.admin_console(),
        Arc::new(ConsoleNotifier),
    )?)
}

fn check_config(config: &AppConfig) -> Result<ExitCode> {
    tracing::info!("Checking configuration...");
    config.validate()?;
    println!("Configuration is valid");
    print!("{}", config.to_yaml()?);
    Ok(ExitCode::SUCCESS)
}
