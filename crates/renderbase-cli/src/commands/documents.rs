//! Document generation commands.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use colored::Colorize;
use serde_json::{Map, Value};

use renderbase_sdk::{DocumentFormat, DocumentListParams, DocumentsService, GenerateRequest};

use crate::output::{print_output, print_page, success, warn, CliError, OutputFormat};

use super::{confirm, ClientConfig};

/// Document commands.
#[derive(Args, Debug)]
pub struct DocumentsCommands {
    #[command(subcommand)]
    pub command: DocumentsSubcommand,
}

/// Document subcommands.
#[derive(Subcommand, Debug)]
pub enum DocumentsSubcommand {
    /// Generate a document from a template
    #[command(alias = "gen")]
    Generate {
        /// Template UUID, short ID or slug
        template_id: String,

        /// Document type (pdf or excel)
        #[arg(long = "type", short = 't', default_value_t = DocumentFormat::Pdf)]
        doc_type: DocumentFormat,

        /// Template variable; the value is parsed as JSON when possible
        #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
        vars: Vec<(String, Value)>,

        /// JSON file with template variables (--var entries override it)
        #[arg(long)]
        vars_file: Option<PathBuf>,

        /// Workspace to generate the document in
        #[arg(long, short)]
        workspace: Option<String>,

        /// Save the document here when it is ready immediately
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Get a generation job
    Get {
        /// Job ID
        job_id: String,
    },

    /// List generation jobs
    #[command(alias = "ls")]
    List {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        limit: Option<u32>,

        /// Only jobs for this template
        #[arg(long)]
        template_id: Option<String>,

        /// Only jobs in this workspace
        #[arg(long)]
        workspace_id: Option<String>,
    },

    /// Delete a generated document
    #[command(alias = "rm")]
    Delete {
        /// Job ID
        job_id: String,

        /// Skip confirmation
        #[arg(long, short = 'y', alias = "yes")]
        force: bool,
    },

    /// Download a document from its download URL
    Download {
        /// Pre-signed download URL
        url: String,

        /// Destination file
        #[arg(long, short)]
        output: PathBuf,
    },
}

impl DocumentsCommands {
    /// Runs the documents command.
    pub async fn run(self, config: &ClientConfig, format: OutputFormat) -> Result<(), CliError> {
        let client = config.build_client()?;
        let documents = client.documents();

        match self.command {
            DocumentsSubcommand::Generate {
                template_id,
                doc_type,
                vars,
                vars_file,
                workspace,
                output,
            } => {
                let variables = load_variables(vars_file.as_deref(), vars).await?;
                let mut request = GenerateRequest::new(template_id, doc_type).with_variables(variables);

                if let Some(ws) = workspace {
                    request = request.with_workspace_id(ws);
                }

                let result = documents.generate(&request).await?;
                if !format.is_machine_readable() {
                    success(&format!("Generation job {} is {}", result.job_id, result.status));
                }
                print_output(&result, format)?;

                if let Some(path) = output {
                    match result.ready_download_url() {
                        Some(url) => save(&documents, url, &path, format).await?,
                        None => warn(&format!(
                            "Job {} is not completed yet; nothing was downloaded. \
                             Check it with `renderbase documents get {}`",
                            result.job_id, result.job_id
                        )),
                    }
                }
            }

            DocumentsSubcommand::Get { job_id } => {
                let job = documents.get(&job_id).await?;
                print_output(&job, format)?;
            }

            DocumentsSubcommand::List {
                page,
                limit,
                template_id,
                workspace_id,
            } => {
                let params = DocumentListParams {
                    page,
                    limit,
                    template_id,
                    workspace_id,
                };
                let jobs = documents.list_with_params(&params).await?;
                print_page(&jobs, "jobs", format)?;
            }

            DocumentsSubcommand::Delete { job_id, force } => {
                confirm(format!("Delete document {}?", job_id.yellow()), force)?;
                documents.delete(&job_id).await?;
                success(&format!("Document {job_id} deleted"));
            }

            DocumentsSubcommand::Download { url, output } => {
                save(&documents, &url, &output, format).await?;
            }
        }

        Ok(())
    }
}

async fn save(
    documents: &DocumentsService,
    url: &str,
    path: &Path,
    format: OutputFormat,
) -> Result<(), CliError> {
    let size = documents.download_to_file(url, path).await?;
    if !format.is_machine_readable() {
        success(&format!("Saved {size} bytes to {}", path.display()));
    }
    Ok(())
}

/// Parses a `key=value` pair; the value is JSON when it parses, otherwise a string.
fn parse_var(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing variable name in `{s}`"));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Merges variables from an optional JSON file with `--var` pairs.
async fn load_variables(
    file: Option<&Path>,
    vars: Vec<(String, Value)>,
) -> Result<Map<String, Value>, CliError> {
    let mut variables = match file {
        Some(path) => {
            let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                CliError::io(format!("Failed to read {}: {e}", path.display()))
            })?;

            match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(CliError::validation(format!(
                        "{} must contain a JSON object",
                        path.display()
                    )))
                }
                Err(e) => {
                    return Err(CliError::validation(format!(
                        "Invalid JSON in {}: {e}",
                        path.display()
                    )))
                }
            }
        }
        None => Map::new(),
    };

    variables.extend(vars);
    Ok(variables)
}
