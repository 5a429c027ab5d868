//! Webhook management commands.

use clap::{Args, Subcommand};
use colored::Colorize;

use renderbase_sdk::{Pagination, WebhookCreate, WebhookEvent};

use crate::output::{print_output, print_page, success, warn, CliError, OutputFormat};

use super::{confirm, ClientConfig};

/// Webhook management commands.
#[derive(Args, Debug)]
pub struct WebhooksCommands {
    #[command(subcommand)]
    pub command: WebhooksSubcommand,
}

/// Webhook subcommands.
#[derive(Subcommand, Debug)]
pub enum WebhooksSubcommand {
    /// Create a webhook
    Create {
        /// Endpoint that receives deliveries
        url: String,

        /// Event to subscribe to (repeatable), e.g. document.completed
        #[arg(long, short, required = true)]
        event: Vec<String>,

        /// Description
        #[arg(long, short)]
        description: Option<String>,
    },

    /// List webhooks
    #[command(alias = "ls")]
    List {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Get webhook details
    Get {
        /// Webhook ID
        id: String,
    },

    /// Delete a webhook
    #[command(alias = "rm")]
    Delete {
        /// Webhook ID
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y', alias = "yes")]
        force: bool,
    },
}

impl WebhooksCommands {
    /// Runs the webhooks command.
    pub async fn run(self, config: &ClientConfig, format: OutputFormat) -> Result<(), CliError> {
        let client = config.build_client()?;

        match self.command {
            WebhooksSubcommand::Create {
                url,
                event,
                description,
            } => {
                let events = parse_events(&event)?;
                let mut request = WebhookCreate::new(url, events);

                if let Some(d) = description {
                    request = request.with_description(d);
                }

                let webhook = client.webhooks().create(&request).await?;
                if !format.is_machine_readable() {
                    success(&format!("Created webhook: {}", webhook.id));
                }
                print_output(&webhook, format)?;
            }

            WebhooksSubcommand::List { page, limit } => {
                let pagination = Pagination { page, limit };
                let webhooks = client.webhooks().list_with_pagination(&pagination).await?;
                print_page(&webhooks, "webhooks", format)?;
            }

            WebhooksSubcommand::Get { id } => {
                let webhook = client.webhooks().get(&id).await?;
                print_output(&webhook, format)?;
            }

            WebhooksSubcommand::Delete { id, force } => {
                confirm(format!("Delete webhook {}?", id.yellow()), force)?;
                client.webhooks().delete(&id).await?;
                success(&format!("Webhook {id} deleted"));
            }
        }

        Ok(())
    }
}

/// Parses event names, warning about ones this CLI does not know.
fn parse_events(names: &[String]) -> Result<Vec<WebhookEvent>, CliError> {
    names
        .iter()
        .map(|name| {
            let name = name.trim().to_lowercase();
            if name.is_empty() {
                return Err(CliError::validation("Event names cannot be empty"));
            }

            let event = WebhookEvent::from(name);
            if let WebhookEvent::Other(ref unknown) = event {
                warn(&format!("Unknown event `{unknown}`; sending it as-is"));
            }
            Ok(event)
        })
        .collect()
}
