//! Template commands.

use clap::{Args, Subcommand};

use renderbase_sdk::{DocumentFormat, TemplateListParams};

use crate::output::{print_output, print_page, CliError, OutputFormat};

use super::ClientConfig;

/// Template commands.
#[derive(Args, Debug)]
pub struct TemplatesCommands {
    #[command(subcommand)]
    pub command: TemplatesSubcommand,
}

/// Template subcommands.
#[derive(Subcommand, Debug)]
pub enum TemplatesSubcommand {
    /// List templates
    #[command(alias = "ls")]
    List {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        limit: Option<u32>,

        /// Only templates of this type (pdf or excel)
        #[arg(long = "type", short = 't')]
        template_type: Option<DocumentFormat>,
    },

    /// Get a template and its variables
    Get {
        /// Template UUID, short ID or slug
        id: String,
    },
}

impl TemplatesCommands {
    /// Runs the templates command.
    pub async fn run(self, config: &ClientConfig, format: OutputFormat) -> Result<(), CliError> {
        let client = config.build_client()?;

        match self.command {
            TemplatesSubcommand::List {
                page,
                limit,
                template_type,
            } => {
                let params = TemplateListParams {
                    page,
                    limit,
                    template_type,
                };
                let templates = client.templates().list_with_params(&params).await?;
                print_page(&templates, "templates", format)?;
            }

            TemplatesSubcommand::Get { id } => {
                let template = client.templates().get(&id).await?;
                print_output(&template, format)?;
            }
        }

        Ok(())
    }
}
