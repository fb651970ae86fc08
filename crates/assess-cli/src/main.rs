//! unrelated-mcp-assess
//!
//! Reads an endpoint inventory (an `OpenAPI` document or a live application's route table) and
//! writes an MCP mapping report: which endpoints to expose as tools vs resources, plus RouteMap and
//! Transform advice.

use anyhow::Context as _;
use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unrelated_mcp_mapping::{EndpointSource, assess, render_markdown};

const STDOUT: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "unrelated-mcp-assess")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["openapi", "routes"])))]
struct Cli {
    /// `OpenAPI` document (.json/.yaml/.yml file or http(s) URL)
    #[arg(long, value_name = "LOCATION")]
    openapi: Option<String>,

    /// Route table dumped from a live application (file or http(s) URL)
    #[arg(long, value_name = "LOCATION")]
    routes: Option<String>,

    /// Output path (`-` for stdout)
    #[arg(long, env = "MCP_ASSESS_OUT", default_value = "mcp_mapping_report.md")]
    out: PathBuf,

    /// Report format
    #[arg(long, env = "MCP_ASSESS_FORMAT", value_enum, default_value_t = ReportFormat::Markdown)]
    format: ReportFormat,

    /// Log level / filter directive (trace, debug, info, warn, error)
    #[arg(long, env = "MCP_ASSESS_LOG", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Markdown,
    Json,
}

impl Cli {
    fn source(&self) -> anyhow::Result<EndpointSource> {
        match (&self.openapi, &self.routes) {
            (Some(location), None) => Ok(EndpointSource::OpenApi(location.clone())),
            (None, Some(location)) => Ok(EndpointSource::Routes(location.clone())),
            _ => anyhow::bail!("exactly one of --openapi or --routes is required"),
        }
    }
}

fn init_tracing(level: &str, json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json)?;

    let source = cli.source()?;
    let client = reqwest::Client::new();
    let endpoints = source
        .load(&client)
        .await
        .with_context(|| format!("load endpoints from '{}'", source.label()))?;

    let report = assess(source.label(), &endpoints);
    let rendered = match cli.format {
        ReportFormat::Markdown => render_markdown(&report),
        ReportFormat::Json => {
            let mut s = serde_json::to_string_pretty(&report).context("serialize report")?;
            s.push('\n');
            s
        }
    };

    if cli.out.as_os_str() == STDOUT {
        print!("{rendered}");
        return Ok(());
    }

    std::fs::write(&cli.out, rendered)
        .with_context(|| format!("write report {}", cli.out.display()))?;
    tracing::info!("Assessed {} endpoint(s) from '{}'", report.endpoints.len(), source.label());
    println!("Wrote MCP mapping report: {}", cli.out.display());
    Ok(())
}
