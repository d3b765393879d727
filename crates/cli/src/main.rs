//! ProblemDesk CLI - Command-line client for the problem API
//! One subcommand per screen action: list, show, create, update, note, delete

mod logging;
mod render;
mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use problemdesk_core::application::{CreateProblemRequest, ProblemService};
use problemdesk_core::domain::ProblemUpdate;
use problemdesk_core::port::time_provider::SystemTimeProvider;
use problemdesk_core::AppError;
use problemdesk_sdk::ProblemDeskClient;
use render::OutputFormat;
use settings::{LogFormat, Settings};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "problemdesk")]
#[command(about = "ProblemDesk - manage ServiceNow problems from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL [default: http://127.0.0.1:3001]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds [default: 30]
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Config file [default: <config dir>/problemdesk/config.toml]
    #[arg(long, global = true, env = "PROBLEMDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Log format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// List all problems, newest first ("New" = created in the last 24 hours)
    List,

    /// Show a problem and its work notes
    Show {
        /// Problem sys_id
        id: String,
    },

    /// Create a new problem
    Create {
        /// Short description (required)
        #[arg(short, long, default_value = "")]
        short_description: String,

        /// Description (required)
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Update the short description of a problem
    Update {
        /// Problem sys_id
        id: String,

        /// New short description
        #[arg(short, long)]
        short_description: String,
    },

    /// Post a work note to a problem
    Note {
        /// Problem sys_id
        id: String,

        /// Work note text
        text: String,
    },

    /// Delete a problem
    Delete {
        /// Problem sys_id
        id: String,
    },
}

async fn run(command: Commands, settings: &Settings, output: OutputFormat) -> Result<()> {
    let client = ProblemDeskClient::with_timeout(
        &settings.api_url,
        Duration::from_secs(settings.timeout_secs),
    )
    .map_err(AppError::from)?;

    let service = ProblemService::new(Arc::new(client), Arc::new(SystemTimeProvider));

    match command {
        Commands::List => {
            let problems = service.list().await?;
            render::print_problem_list(&problems, output)?;
        }

        Commands::Show { id } => {
            let detail = service.detail(&id).await?;
            render::print_problem_detail(&detail, output)?;
        }

        Commands::Create {
            short_description,
            description,
        } => {
            let created = service
                .create(CreateProblemRequest {
                    short_description,
                    description,
                })
                .await?;
            render::print_created(&created, output)?;
        }

        Commands::Update {
            id,
            short_description,
        } => {
            service
                .update(&id, ProblemUpdate::short_description(short_description))
                .await?;
            println!("{}", "✓ Problem updated successfully".green().bold());
        }

        Commands::Note { id, text } => {
            let detail = service.add_work_note(&id, text).await?;
            if output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&detail.work_notes)?);
            } else {
                println!("{}", "✓ New work note added".green().bold());
                println!();
                render::print_work_notes(&detail.work_notes);
            }
        }

        Commands::Delete { id } => {
            service.delete(&id).await?;
            println!("{}", "✓ Problem deleted successfully.".green().bold());
        }
    }

    Ok(())
}

/// Validation problems are shown as-is; anything else is logged and reported generically
fn report(err: &anyhow::Error) {
    if let Some(app_err) = err.downcast_ref::<AppError>() {
        if app_err.is_validation() {
            let message = match app_err {
                AppError::Validation(msg) => msg.clone(),
                other => other.to_string(),
            };
            eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
            return;
        }
    }

    tracing::error!(error = ?err, "Request failed");
    eprintln!("{} {}", "✗".red().bold(), "Request failed".red());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .override_with(cli.api_url, cli.timeout_secs, cli.log_format);

    logging::init(settings.log_format)?;

    tracing::debug!(
        api_url = %settings.api_url,
        timeout_secs = settings.timeout_secs,
        "Configuration loaded"
    );

    if let Err(e) = run(cli.command, &settings, cli.output).await {
        report(&e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_create_fields_default_to_empty() {
        let cli = Cli::try_parse_from(["problemdesk", "create", "-s", "Only short"]).unwrap();
        match cli.command {
            Commands::Create {
                short_description,
                description,
            } => {
                assert_eq!(short_description, "Only short");
                assert_eq!(description, "");
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "problemdesk",
            "list",
            "--api-url",
            "https://proxy.example.com",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("https://proxy.example.com"));
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_note_requires_text() {
        assert!(Cli::try_parse_from(["problemdesk", "note", "abc"]).is_err());
    }

    #[test]
    fn test_validation_error_is_recognised_through_anyhow() {
        let err: anyhow::Error = AppError::Validation("Both required".to_string()).into();
        assert!(err.downcast_ref::<AppError>().unwrap().is_validation());
    }
}
