//! CLI entry point for the `flowg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use flowchart_graph::cli::commands;
use flowchart_graph::cli::config::resolve_document_path;
use flowchart_graph::FlowError;

#[derive(Parser)]
#[command(
    name = "flowg",
    about = "flowg: validate and query flowchart graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty flowchart document
    Create {
        /// Path to the document to create
        file: PathBuf,
        /// Flowchart title
        #[arg(long)]
        title: String,
        /// Flowchart ID
        #[arg(long, default_value = "1")]
        id: u64,
    },
    /// Display information about a flowchart document
    Info {
        /// Path to the document (defaults to $FLOWG_FILE, then ./flowchart.json)
        file: Option<PathBuf>,
    },
    /// Check that every edge references existing nodes
    Validate {
        /// Path to the document (defaults to $FLOWG_FILE, then ./flowchart.json)
        file: Option<PathBuf>,
    },
    /// List the edges leaving a node
    Outgoing {
        /// Path to the document (defaults to $FLOWG_FILE, then ./flowchart.json)
        file: Option<PathBuf>,
        /// Node ID to query
        #[arg(long)]
        node_id: String,
    },
    /// List the nodes reachable from a node
    Reachable {
        /// Path to the document (defaults to $FLOWG_FILE, then ./flowchart.json)
        file: Option<PathBuf>,
        /// Start node ID
        #[arg(long)]
        node_id: String,
    },
    /// Change the flowchart title
    Rename {
        /// Path to the document (defaults to $FLOWG_FILE, then ./flowchart.json)
        file: Option<PathBuf>,
        /// New title
        #[arg(long)]
        title: String,
    },
    /// Convert a flowchart from a relational row dump into a document
    FromRows {
        /// Path to the JSON row dump
        rows_file: PathBuf,
        /// Flowchart ID to extract
        flowchart_id: u64,
        /// Path of the document to write
        out: PathBuf,
    },
    /// Print the normalized graph as JSON
    Export {
        /// Path to the document (defaults to $FLOWG_FILE, then ./flowchart.json)
        file: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Create { file, title, id } => commands::cmd_create(&file, id, &title),
        Commands::Info { file } => {
            commands::cmd_info(&resolve_document_path(file.as_deref()), json)
        }
        Commands::Validate { file } => {
            match commands::cmd_validate(&resolve_document_path(file.as_deref()), json) {
                Ok(false) => process::exit(5),
                other => other.map(|_| ()),
            }
        }
        Commands::Outgoing { file, node_id } => {
            commands::cmd_outgoing(&resolve_document_path(file.as_deref()), &node_id, json)
        }
        Commands::Reachable { file, node_id } => {
            commands::cmd_reachable(&resolve_document_path(file.as_deref()), &node_id, json)
        }
        Commands::Rename { file, title } => {
            commands::cmd_rename(&resolve_document_path(file.as_deref()), &title, json)
        }
        Commands::FromRows {
            rows_file,
            flowchart_id,
            out,
        } => commands::cmd_from_rows(&rows_file, flowchart_id, &out),
        Commands::Export { file, pretty } => {
            commands::cmd_export(&resolve_document_path(file.as_deref()), pretty)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            FlowError::Io(_) => 1,
            FlowError::Json(_) | FlowError::FlowchartNotFound(_) => 2,
            FlowError::InvalidArgument(_) => 3,
            FlowError::NodeNotFound(_) => 4,
        };
        process::exit(code);
    }
}
