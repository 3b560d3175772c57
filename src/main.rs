//! docsearch-mcp: MCP server exposing a document corpus to AI-agent clients.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use docsearch_mcp::config;
use docsearch_mcp::corpus::DocumentStore;
use docsearch_mcp::mcp::server::McpServer;
use docsearch_mcp::tools::handlers::document_tools;

/// MCP server exposing a document corpus through search and fetch tools.
///
/// Clients discover the tools via capability negotiation, then issue ranked
/// keyword searches and fetch full documents by id.
#[derive(Parser, Debug)]
#[command(name = "docsearch-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Path to a JSON corpus file (overrides the configured corpus)
    #[arg(long, value_name = "CORPUS_FILE")]
    corpus: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
///
/// Logs go to stderr: stdout belongs to the MCP protocol stream.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the docsearch-mcp server.
fn main() -> ExitCode {
    let args = Args::parse();

    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting docsearch-mcp server"
    );

    // CLI corpus override wins over the config file.
    let corpus_path = args.corpus.or(cfg.corpus_path);
    let store = match corpus_path {
        Some(path) => match DocumentStore::load(&path) {
            Ok(store) => {
                info!(path = %path.display(), documents = store.len(), "Corpus loaded");
                store
            }
            Err(e) => {
                error!(error = %e, "Failed to load corpus");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let store = DocumentStore::sample();
            info!(documents = store.len(), "Using built-in sample corpus");
            store
        }
    };

    let registry = document_tools(Arc::new(store), cfg.search.to_policy());
    let mut server = McpServer::new(Arc::new(registry));

    info!("MCP server ready, waiting for client connection...");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(server.run()) {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}
