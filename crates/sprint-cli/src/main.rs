mod config;
mod http;
mod output;
mod request;
mod server;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmcp::{ServiceExt, transport::stdio};
use sprint_core::generate_plan;

use crate::config::{Config, OutputFormat};
use crate::output::{catalog_output, plan_output};
use crate::request::PlanRequest;

#[derive(Parser)]
#[command(name = "sprint", about = "Learning sprint planner CLI, MCP server and HTTP API")]
struct Cli {
    /// Path to a TOML config file (overrides SPRINT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a day-by-day plan for a topic
    Plan {
        /// What you want to learn
        topic: String,

        /// Sprint length in days (1-365); defaults to the configured value
        #[arg(long, short, allow_negative_numbers = true)]
        days: Option<String>,

        /// Output format; defaults to the configured value
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the phases every plan is built from
    Phases {
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Start MCP server on stdio transport
    Serve,

    /// Start the HTTP API
    Http {
        /// Listen address; defaults to the configured value
        #[arg(long)]
        bind: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Commands::Plan {
            topic,
            days,
            format,
        } => cmd_plan(&config, &topic, days.as_deref(), format),
        Commands::Phases { format } => cmd_phases(&config, format),
        Commands::Serve => cmd_serve(config).await,
        Commands::Http { bind } => cmd_http(config, bind).await,
    }
}

fn cmd_plan(
    config: &Config,
    topic: &str,
    days: Option<&str>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let request = match days {
        Some(raw) => PlanRequest::parse(topic, raw),
        None => PlanRequest::new(topic, f64::from(config.default_days)),
    }?;

    let plan = generate_plan(&request.topic, i64::from(request.days));
    tracing::debug!(
        topic = %plan.topic,
        days = plan.total_days,
        deep = plan.cadence.deep,
        medium = plan.cadence.medium,
        light = plan.cadence.light,
        "generated plan"
    );

    println!("{}", plan_output(&plan, format.unwrap_or(config.format))?);
    Ok(())
}

fn cmd_phases(config: &Config, format: Option<OutputFormat>) -> Result<()> {
    println!("{}", catalog_output(format.unwrap_or(config.format))?);
    Ok(())
}

async fn cmd_serve(config: Config) -> Result<()> {
    tracing::info!("starting MCP server");

    let server = server::SprintServer::new(config);
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await?;

    tracing::info!("MCP server stopped");
    Ok(())
}

async fn cmd_http(mut config: Config, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.bind = bind;
    }
    http::serve(config).await
}
