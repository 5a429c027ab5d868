//! CLI command definitions and implementations.

mod documents;
mod templates;
mod webhooks;

use std::time::Duration;

use clap::{Parser, Subcommand};
use renderbase_sdk::{RenderbaseClient, API_KEY_ENV, BASE_URL_ENV};

use crate::output::{CliError, ErrorKind, OutputFormat};

pub use documents::DocumentsCommands;
pub use templates::TemplatesCommands;
pub use webhooks::WebhooksCommands;

/// Renderbase CLI
///
/// Generate PDF and Excel documents from templates.
#[derive(Parser, Debug)]
#[command(name = "renderbase")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// API key for authentication
    #[arg(long, env = API_KEY_ENV, global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Renderbase API base URL
    #[arg(long, env = BASE_URL_ENV, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// Output format
    #[arg(long, short, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate, inspect and download documents
    #[command(alias = "docs", alias = "doc")]
    Documents(DocumentsCommands),

    /// Browse templates
    #[command(alias = "tmpl")]
    Templates(TemplatesCommands),

    /// Manage webhooks
    #[command(alias = "wh")]
    Webhooks(WebhooksCommands),

    /// Display CLI version and build info
    Version,
}

impl Cli {
    /// Runs the CLI command.
    pub async fn run(self) -> Result<(), CliError> {
        if self.no_color {
            colored::control::set_override(false);
        }

        let client_config = ClientConfig {
            api_key: self.api_key,
            base_url: self.base_url,
            timeout_secs: self.timeout,
        };

        match self.command {
            Commands::Documents(cmd) => cmd.run(&client_config, self.format).await,
            Commands::Templates(cmd) => cmd.run(&client_config, self.format).await,
            Commands::Webhooks(cmd) => cmd.run(&client_config, self.format).await,
            Commands::Version => {
                version();
                Ok(())
            }
        }
    }
}

fn version() {
    println!("renderbase {}", env!("CARGO_PKG_VERSION"));
    println!("SDK version: {}", renderbase_sdk::VERSION);
    println!();
    println!("Build info:");
    println!("  Target: {}", std::env::consts::ARCH);
    println!("  OS: {}", std::env::consts::OS);
}

/// Client configuration built from CLI args.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key.
    pub api_key: Option<String>,
    /// Base URL override.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Builds a Renderbase client from this configuration.
    pub fn build_client(&self) -> Result<RenderbaseClient, CliError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CliError::config(format!(
                "No API key configured. Set {API_KEY_ENV} or use --api-key"
            ))
        })?;

        let mut builder = RenderbaseClient::builder()
            .api_key(api_key)
            .timeout(Duration::from_secs(self.timeout_secs));

        if let Some(ref url) = self.base_url {
            builder = builder.base_url(url);
        }

        builder.build().map_err(CliError::from)
    }
}

/// Asks for confirmation unless `force` is set.
pub(crate) fn confirm(prompt: String, force: bool) -> Result<(), CliError> {
    if force {
        return Ok(());
    }

    let confirmed = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::with_cause(ErrorKind::Io, "Failed to read input", e))?;

    if confirmed {
        Ok(())
    } else {
        Err(CliError::cancelled())
    }
}
