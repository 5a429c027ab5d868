//! Table and detail views for SDK types.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use renderbase_sdk::{GenerateResult, JobStatus, Template, Webhook};
use tabled::{settings::Style, Table, Tabled};

use super::truncate;

/// Trait for types that can be displayed as a table.
pub trait TableDisplay: serde::Serialize {
    /// One row of the list table.
    type Row: Tabled;

    /// Prints a detail view of a single item.
    fn print_details(&self);

    /// Converts the item to a list row.
    fn to_row(&self) -> Self::Row;

    /// Identifier printed in plain output.
    fn plain_id(&self) -> &str;
}

/// Renders items as a rounded table.
pub fn render_table<T: TableDisplay>(items: &[T]) -> String {
    let mut table = Table::new(items.iter().map(T::to_row));
    table.with(Style::rounded());
    table.to_string()
}

/// Formats an optional timestamp, `-` when absent.
pub fn format_timestamp(at: Option<&DateTime<Utc>>) -> String {
    at.map_or_else(
        || "-".to_string(),
        |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

fn field(label: &str, value: impl std::fmt::Display) {
    println!("{}: {}", label.bold(), value);
}

fn format_status(status: &JobStatus) -> ColoredString {
    match status {
        JobStatus::Completed => "completed".green(),
        JobStatus::Queued => "queued".yellow(),
        JobStatus::Processing => "processing".cyan(),
        JobStatus::Failed => "failed".red().bold(),
        JobStatus::Other(s) => s.normal(),
    }
}

/// List row for a generation job.
#[derive(Tabled)]
pub struct JobRow {
    #[tabled(rename = "JOB ID")]
    job_id: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "FORMAT")]
    format: String,
    #[tabled(rename = "TEMPLATE")]
    template_id: String,
    #[tabled(rename = "EXPIRES")]
    expires_at: String,
}

impl TableDisplay for GenerateResult {
    type Row = JobRow;

    fn print_details(&self) {
        field("Job ID", &self.job_id);
        field("Status", format_status(&self.status));
        field("Format", &self.format);
        field("Template", &self.template_id);

        if let Some(url) = self.ready_download_url() {
            field("Download URL", url);
            field("Expires", format_timestamp(self.expires_at.as_ref()));
        }
    }

    fn to_row(&self) -> JobRow {
        JobRow {
            job_id: self.job_id.clone(),
            status: self.status.to_string(),
            format: self.format.to_string(),
            template_id: truncate(&self.template_id, 36),
            expires_at: format_timestamp(self.expires_at.as_ref()),
        }
    }

    fn plain_id(&self) -> &str {
        &self.job_id
    }
}

/// List row for a template.
#[derive(Tabled)]
pub struct TemplateRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    template_type: String,
    #[tabled(rename = "SHORT ID")]
    short_id: String,
    #[tabled(rename = "VARIABLES")]
    variables: usize,
}

impl TableDisplay for Template {
    type Row = TemplateRow;

    fn print_details(&self) {
        field("ID", &self.id);
        field("Name", &self.name);
        field("Type", &self.template_type);
        if let Some(ref short_id) = self.short_id {
            field("Short ID", short_id);
        }
        if let Some(ref slug) = self.slug {
            field("Slug", slug);
        }
        if let Some(ref desc) = self.description {
            field("Description", desc);
        }
        field("Created", format_timestamp(self.created_at.as_ref()));
        field("Updated", format_timestamp(self.updated_at.as_ref()));

        if !self.variables.is_empty() {
            println!("\n{}", "Variables:".bold().underline());
            for var in &self.variables {
                let marker = if var.required { "*".red() } else { " ".normal() };
                print!(
                    "  {marker} {} ({})",
                    var.name.green(),
                    var.variable_type.as_deref().unwrap_or("any")
                );
                if let Some(ref desc) = var.description {
                    print!(" - {desc}");
                }
                println!();
            }
        }
    }

    fn to_row(&self) -> TemplateRow {
        TemplateRow {
            id: self.id.clone(),
            name: truncate(&self.name, 30),
            template_type: self.template_type.to_string(),
            short_id: self.short_id.clone().unwrap_or_else(|| "-".to_string()),
            variables: self.variables.len(),
        }
    }

    fn plain_id(&self) -> &str {
        &self.id
    }
}

/// List row for a webhook.
#[derive(Tabled)]
pub struct WebhookRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "STATUS")]
    status: &'static str,
    #[tabled(rename = "EVENTS")]
    events: String,
}

impl TableDisplay for Webhook {
    type Row = WebhookRow;

    fn print_details(&self) {
        field("ID", &self.id);
        field("URL", &self.url);
        field("Active", if self.active { "Yes".green() } else { "No".red() });
        field("Events", join_events(self));
        if let Some(ref desc) = self.description {
            field("Description", desc);
        }
        field("Created", format_timestamp(self.created_at.as_ref()));

        if let Some(ref secret) = self.secret {
            println!(
                "\n{}",
                "Signing secret (save this - it won't be shown again):".yellow().bold()
            );
            println!("{secret}");
        }
    }

    fn to_row(&self) -> WebhookRow {
        WebhookRow {
            id: self.id.clone(),
            url: truncate(&self.url, 40),
            status: if self.active { "active" } else { "inactive" },
            events: join_events(self),
        }
    }

    fn plain_id(&self) -> &str {
        &self.id
    }
}

fn join_events(webhook: &Webhook) -> String {
    webhook
        .events
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
