//! Yxflow CLI - query Alteryx workflow structure
//!
//! The conversion pipeline proper (per-tool code generation) lives in the
//! layer above; this binary answers the structural questions that layer
//! needs: container membership, execution order, and subset ordering.

use std::fs;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use yxflow::{
    execution_order, project, ContainerMembership, DependencyGraph, FixSuggestion, Workflow,
    YxError,
};

#[derive(Parser)]
#[command(name = "yxflow")]
#[command(about = "Yxflow - dependency-order resolver for Alteryx workflows")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List all tools inside a container, including nested containers
    Children {
        /// Path to the workflow records file (.yaml)
        file: String,

        /// Tool ID of the container
        container_id: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the full dependency-ordered tool sequence
    Order {
        /// Path to the workflow records file (.yaml)
        file: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Reorder the given tool IDs to match the execution order
    Project {
        /// Path to the workflow records file (.yaml)
        file: String,

        /// Comma-separated tool IDs, e.g. "644, 645, 646" (quotes and
        /// brackets are tolerated)
        ids: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Parse a workflow records file and report its structure
    Validate {
        /// Path to the workflow records file (.yaml)
        file: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Children { file, container_id, format } => {
            children(&file, &container_id, format)
        }
        Commands::Order { file, format } => order(&file, format),
        Commands::Project { file, ids, format } => project_ids(&file, &ids, format),
        Commands::Validate { file } => validate(&file),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn load_workflow(file: &str) -> Result<Workflow, YxError> {
    let yaml = fs::read_to_string(file)?;
    let workflow: Workflow = serde_yaml::from_str(&yaml)?;
    debug!(
        nodes = workflow.nodes.len(),
        connections = workflow.connections.len(),
        "loaded workflow records"
    );
    Ok(workflow)
}

/// Quote/bracket noise users paste around tool ID lists
static ID_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["'\[\]]"#).unwrap());

/// Split a comma-separated tool ID list, stripping quotes and brackets
fn parse_tool_ids(input: &str) -> Vec<String> {
    ID_NOISE
        .replace_all(input, "")
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_ids(ids: &[&str], format: OutputFormat) -> Result<(), YxError> {
    match format {
        OutputFormat::Text => println!("[{}]", ids.join(", ")),
        OutputFormat::Json => println!("{}", serde_json::to_string(ids)?),
    }
    Ok(())
}

fn children(file: &str, container_id: &str, format: OutputFormat) -> Result<(), YxError> {
    let workflow = load_workflow(file)?;
    let membership = ContainerMembership::resolve(&workflow.nodes)?;

    let members = membership.children_of(container_id);
    if members.is_empty() {
        // Unknown container and empty container read the same here
        println!("No child tools found for container '{container_id}'");
        return Ok(());
    }

    let ids: Vec<&str> = members.iter().map(|id| id.as_ref()).collect();
    print_ids(&ids, format)
}

fn order(file: &str, format: OutputFormat) -> Result<(), YxError> {
    let workflow = load_workflow(file)?;
    let graph = DependencyGraph::from_records(&workflow.nodes, &workflow.connections)?;
    let sequence = execution_order(&graph)?;

    let ids: Vec<&str> = sequence.iter().map(|id| id.as_ref()).collect();
    match format {
        OutputFormat::Text => {
            for id in &ids {
                println!("{id}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&ids)?),
    }
    Ok(())
}

fn project_ids(file: &str, ids: &str, format: OutputFormat) -> Result<(), YxError> {
    let requested = parse_tool_ids(ids);
    if requested.is_empty() {
        return Err(YxError::EmptyToolIds);
    }
    debug!(?requested, "projecting requested tool IDs");

    let workflow = load_workflow(file)?;
    let graph = DependencyGraph::from_records(&workflow.nodes, &workflow.connections)?;
    let sequence = execution_order(&graph)?;
    let projected = project(&requested, &sequence)?;

    let ids: Vec<&str> = projected.iter().map(|id| id.as_ref()).collect();
    print_ids(&ids, format)
}

fn validate(file: &str) -> Result<(), YxError> {
    let workflow = load_workflow(file)?;
    let graph = DependencyGraph::from_records(&workflow.nodes, &workflow.connections)?;
    let membership = ContainerMembership::resolve(&workflow.nodes)?;
    let sequence = execution_order(&graph)?;

    println!("{} Workflow '{}' is valid", "✓".green(), file);
    println!(
        "  Tools: {} ({} executable)",
        workflow.nodes.len(),
        workflow.executable_nodes().len()
    );
    println!("  Connections: {}", workflow.connections.len());
    println!("  Containers with members: {}", membership.len());
    println!("  Execution order: {} tools sequenced", sequence.len());

    Ok(())
}
