//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod ask;
pub mod settings;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cli::ask::run_ask;
use crate::cli::settings::{apply_setting, SettingChange};
use crate::core::config::data::Config;
use crate::core::config::settings::{ServiceSettings, SettingOverrides};
use crate::ui::chat_loop::run_chat;
use crate::utils::logging::init_tracing;

#[derive(Parser)]
#[command(name = "warehouse-chat")]
#[command(version)]
#[command(about = "A terminal chat screen for the warehouse assistant service")]
#[command(
    long_about = "Warehouse Chat is a full-screen terminal client for the AI Warehouse Assistant. \
Ask about products, stock, item codes and descriptions in plain language; each question is \
sent to the service's /query endpoint and the latest answer is shown.\n\n\
Service address (first match wins):\n\
  --url <URL>              Command-line flag\n\
  WAREHOUSE_API_URL        Environment variable\n\
  service-url              Config file value (see 'warehouse-chat config')\n\
  http://localhost:8000    Built-in default\n\n\
Controls:\n\
  Enter / Ctrl+S           Send the question\n\
  Alt+Enter / Shift+Enter  Insert a new line\n\
  Up/Down, PgUp/PgDn       Scroll the answer\n\
  Shift+Up/Down            Move the cursor inside the question\n\
  Ctrl+C                   Quit"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the query service
    #[arg(short = 'u', long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Number of results the service should consider (sent as null when unset)
    #[arg(short = 'k', long = "top-k", global = true, value_name = "N")]
    pub top_k: Option<u32>,

    /// Request timeout in seconds; 0 waits forever
    #[arg(short = 't', long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Write diagnostic logs to the given file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Ask a single question and print the answer without the TUI
    Ask {
        /// The question (can be multiple words)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        question: Vec<String>,
    },
    /// Set configuration values
    Set {
        /// Configuration key to set (service-url, top-k, timeout)
        key: Option<String>,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Print the values stored in the config file
    Config,
}

impl Args {
    pub fn overrides(&self) -> SettingOverrides {
        SettingOverrides {
            service_url: self.url.clone(),
            top_k: self.top_k,
            request_timeout_secs: self.timeout,
        }
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

fn resolve_settings(args: &Args) -> Result<ServiceSettings, Box<dyn Error>> {
    let config = Config::load()?;
    let settings = ServiceSettings::from_environment(&args.overrides(), &config);
    debug!(?settings, "resolved service settings");
    Ok(settings)
}

fn run_setting_change(key: &str, change: SettingChange) -> Result<(), Box<dyn Error>> {
    match apply_setting(key, &change) {
        Ok(message) => {
            println!("{message}");
            Ok(())
        }
        Err(err) => {
            err.print();
            std::process::exit(err.exit_code());
        }
    }
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.log.as_deref())?;

    match args.command {
        None | Some(Commands::Chat) => {
            let settings = resolve_settings(&args)?;
            run_chat(settings).await
        }
        Some(Commands::Ask { ref question }) => {
            let settings = resolve_settings(&args)?;
            run_ask(question.clone(), settings).await
        }
        Some(Commands::Set { ref key, ref value }) => match key {
            Some(key) if !value.is_empty() => {
                run_setting_change(key, SettingChange::Set(value.clone()))
            }
            _ => {
                Config::load()?.print_all();
                Ok(())
            }
        },
        Some(Commands::Unset { ref key }) => run_setting_change(key, SettingChange::Unset),
        Some(Commands::Config) => {
            let config = Config::load()?;
            println!("Config file: {}", Config::config_path()?.display());
            config.print_all();
            Ok(())
        }
    }
}
