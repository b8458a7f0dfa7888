// SPDX-License-Identifier: PMPL-1.0-or-later
//! Auditbot CLI - accessibility audits normalized to one WCAG-mapped schema.

use auditbot::config::AuditConfig;
use auditbot::executor::AuditExecutor;
use auditbot::report::Engine;
use auditbot::server;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Accessibility audit normalization service
#[derive(Parser)]
#[command(name = "auditbot")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the audit tools over stdio (MCP-style JSON-RPC)
    Serve {
        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Run one audit and print the normalized report as JSON
    Audit {
        /// URL (http://, https://), local file path, or file:// URL
        url: String,

        /// Engine to run
        #[arg(long, default_value = "axe")]
        engine: EngineArg,

        /// Timeout in milliseconds
        #[arg(long)]
        timeout: Option<u64>,

        /// WCAG tag filter for the DOM-rule engine (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Remote-scan API key (falls back to WAVE_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },
}

/// Engine CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineArg {
    Axe,
    Lighthouse,
    Wave,
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Axe => Engine::Axe,
            EngineArg::Lighthouse => Engine::Lighthouse,
            EngineArg::Wave => Engine::Wave,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("auditbot=debug")
    } else {
        EnvFilter::new("auditbot=warn")
    };

    // Logs go to stderr; stdout carries the protocol and report payloads
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { verbose } => {
            init_logging(verbose);
            server::serve(AuditExecutor::new()).await?;
        }

        Commands::Audit { url, engine, timeout, tags, api_key, verbose } => {
            init_logging(verbose);
            let config = AuditConfig {
                timeout_ms: timeout,
                tags: if tags.is_empty() { None } else { Some(tags) },
                api_key,
                ..Default::default()
            };

            let executor = AuditExecutor::new();
            let report = executor.run(engine.into(), &url, &config).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);

            if report.has_failures() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
