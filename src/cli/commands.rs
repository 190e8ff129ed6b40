//! CLI command implementations.

use std::path::Path;

use crate::api::response::{
    edges_response, flowchart_response, nodes_response, validation_response,
};
use crate::engine::GraphEngine;
use crate::format::{DocumentReader, DocumentWriter, RelationalStore, SnapshotSource};
use crate::types::{FlowResult, Flowchart};

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Create a new empty flowchart document.
pub fn cmd_create(path: &Path, id: u64, title: &str) -> FlowResult<()> {
    let flowchart = Flowchart::new(id, title);
    DocumentWriter::pretty().write_to_file(&flowchart, path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display information about a flowchart document.
pub fn cmd_info(path: &Path, json: bool) -> FlowResult<()> {
    let flowchart = DocumentReader::read_from_file(path)?;
    let graph = flowchart.snapshot();
    let invalid = GraphEngine::new().validate_edges(&graph).invalid_edges.len();
    let self_loops = graph.edges().iter().filter(|e| e.is_self_loop()).count();

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "id": flowchart.id,
            "title": flowchart.title,
            "created_at": flowchart.created_at.to_rfc3339(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "invalid_edges": invalid,
            "self_loops": self_loops,
        }));
    } else {
        println!("File: {}", path.display());
        println!("Flowchart: {} ({})", flowchart.id, flowchart.title);
        println!(
            "Created: {}",
            flowchart.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Invalid edges: {}", invalid);
        println!("Self-loops: {}", self_loops);
    }
    Ok(())
}

/// Validate that every edge references existing nodes.
///
/// Returns whether the graph is valid; an invalid graph is not an error.
pub fn cmd_validate(path: &Path, json: bool) -> FlowResult<bool> {
    let flowchart = DocumentReader::read_from_file(path)?;
    let graph = flowchart.snapshot();
    let report = GraphEngine::new().validation_report(&graph);

    if json {
        print_json(&validation_response(&report).body);
    } else if report.is_valid() {
        println!("Graph is valid ({} edges checked)", graph.edge_count());
    } else {
        println!(
            "Invalid graph: {} edges reference missing nodes",
            report.edges.len()
        );
        for edge in &report.edges {
            let side = match (
                graph.contains_node(edge.source.as_str()),
                graph.contains_node(edge.target.as_str()),
            ) {
                (false, false) => "source and target missing",
                (false, true) => "source missing",
                _ => "target missing",
            };
            println!("  {}: {} -> {} ({})", edge.id, edge.source, edge.target, side);
        }
    }
    Ok(report.is_valid())
}

/// List the edges leaving a node.
pub fn cmd_outgoing(path: &Path, node_id: &str, json: bool) -> FlowResult<()> {
    let flowchart = DocumentReader::read_from_file(path)?;
    let graph = flowchart.snapshot();
    let edges = GraphEngine::new().outgoing_edges(&graph, node_id)?;

    if json {
        print_json(&edges_response(&edges).body);
    } else {
        println!("Outgoing edges from {}: {}", node_id, edges.len());
        for edge in &edges {
            println!("  {}: {} -> {}", edge.id, edge.source, edge.target);
        }
    }
    Ok(())
}

/// List the nodes reachable from a start node.
pub fn cmd_reachable(path: &Path, node_id: &str, json: bool) -> FlowResult<()> {
    let flowchart = DocumentReader::read_from_file(path)?;
    let reachable = GraphEngine::new().reachable_from(&flowchart.snapshot(), node_id)?;
    let nodes = flowchart.nodes_in(&reachable);

    if json {
        print_json(&nodes_response(&nodes).body);
    } else {
        println!("Reachable from {}: {} nodes", node_id, nodes.len());
        for node in &nodes {
            match node.label() {
                Some(label) => println!("  {} ({})", node.id, label),
                None => println!("  {}", node.id),
            }
        }
    }
    Ok(())
}

/// Change the flowchart title; nodes and edges are left untouched.
pub fn cmd_rename(path: &Path, title: &str, json: bool) -> FlowResult<()> {
    let mut flowchart = DocumentReader::read_from_file(path)?;
    flowchart.apply_update(&serde_json::json!({ "title": title }))?;
    DocumentWriter::pretty().write_to_file(&flowchart, path)?;

    if json {
        print_json(&flowchart_response(&flowchart).body);
    } else {
        println!("Renamed flowchart {} to {:?}", flowchart.id, flowchart.title);
    }
    Ok(())
}

/// Convert one flowchart from a relational row dump into a document.
pub fn cmd_from_rows(rows_path: &Path, flowchart_id: u64, out: &Path) -> FlowResult<()> {
    let store = RelationalStore::read_from_file(rows_path)?;
    let flowchart = store.load_flowchart(flowchart_id)?;
    DocumentWriter::pretty().write_to_file(&flowchart, out)?;
    println!(
        "Wrote flowchart {} ({} nodes, {} edges) to {}",
        flowchart.id,
        flowchart.data.nodes.len(),
        flowchart.data.edges.len(),
        out.display()
    );
    Ok(())
}

/// Print the normalized snapshot (deduplicated node IDs, edges) as JSON.
pub fn cmd_export(path: &Path, pretty: bool) -> FlowResult<()> {
    let flowchart = DocumentReader::read_from_file(path)?;
    let graph = flowchart.snapshot();
    let export = serde_json::json!({
        "id": flowchart.id,
        "nodes": graph.nodes(),
        "edges": graph.edges(),
    });
    let out = if pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    println!("{}", out);
    Ok(())
}
