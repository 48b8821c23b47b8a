//! CLI entry and dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use classboard_core::config::{self, Config};

mod commands;

#[derive(Parser)]
#[command(name = "classboard")]
#[command(version)]
#[command(about = "Timetable, attendance, notes and assignments for your class")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of $CLASSBOARD_HOME/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the weekly timetable
    Timetable,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write a default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config::paths::config_path);

    match cli.command {
        // Config commands must work even when the existing file is broken
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
        },
        Some(Commands::Timetable) => {
            let config = load(&config_path)?;
            commands::timetable::run(&config)
        }
        // default to the dashboard
        None => {
            let config = load(&config_path)?;
            commands::dashboard::run(&config)
        }
    }
}

fn load(path: &Path) -> Result<Config> {
    Config::load_from(path).context("load config")
}
