//! Response mapping tests: statuses and bodies for each endpoint.

use serde_json::json;

use flowchart_graph::api::response::{
    error_response, GRAPH_INVALID, GRAPH_VALID, NODE_ID_REQUIRED, STATUS_BAD_REQUEST,
    STATUS_NOT_FOUND, STATUS_OK,
};
use flowchart_graph::api::{required_node_id, update_flowchart, FlowchartApi};
use flowchart_graph::format::{EdgeRow, FlowchartRow, NodeRow, RelationalStore};
use flowchart_graph::types::{Edge, FlowError, Flowchart, Node};

fn chain() -> Flowchart {
    Flowchart::new(1, "Chain").with_data(
        vec![
            Node::named("A", "alpha"),
            Node::named("B", "beta"),
            Node::named("C", "gamma"),
            Node::new("D"),
        ],
        vec![Edge::new("e1", "A", "B"), Edge::new("e2", "B", "C")],
    )
}

fn broken() -> Flowchart {
    Flowchart::new(2, "Broken").with_data(
        vec![Node::new("A"), Node::new("B")],
        vec![Edge::new("e1", "A", "B"), Edge::new("e2", "A", "X")],
    )
}

// ==================== Validate Tests ====================

#[test]
fn test_validate_graph_ok() {
    let doc = chain();
    let resp = FlowchartApi::new(&doc).validate_graph(1);
    assert_eq!(resp.status, STATUS_OK);
    assert!(resp.is_success());
    assert_eq!(resp.body, json!({ "message": GRAPH_VALID }));
}

#[test]
fn test_validate_graph_lists_invalid_edges() {
    let doc = broken();
    let resp = FlowchartApi::new(&doc).validate_graph(2);
    assert_eq!(resp.status, STATUS_BAD_REQUEST);
    assert_eq!(resp.body["message"], GRAPH_INVALID);
    assert_eq!(
        resp.body["invalid_edges"],
        json!([{ "id": "e2", "source": "A", "target": "X" }])
    );
}

#[test]
fn test_validate_graph_unknown_flowchart() {
    let doc = chain();
    let resp = FlowchartApi::new(&doc).validate_graph(42);
    assert_eq!(resp.status, STATUS_NOT_FOUND);
}

// ==================== Outgoing Edge Tests ====================

#[test]
fn test_outgoing_edges_endpoint() {
    let doc = chain();
    let resp = FlowchartApi::new(&doc).outgoing_edges(1, Some("A"));
    assert_eq!(resp.status, STATUS_OK);
    assert_eq!(resp.body, json!([{ "id": "e1", "source": "A", "target": "B" }]));

    let resp = FlowchartApi::new(&doc).outgoing_edges(1, Some("unknown"));
    assert_eq!(resp.status, STATUS_OK);
    assert_eq!(resp.body, json!([]));
}

#[test]
fn test_outgoing_edges_requires_node_id() {
    let doc = chain();
    for param in [None, Some("")] {
        let resp = FlowchartApi::new(&doc).outgoing_edges(1, param);
        assert_eq!(resp.status, STATUS_BAD_REQUEST);
        assert_eq!(resp.body, json!({ "error": NODE_ID_REQUIRED }));
    }
}

// ==================== Connected Node Tests ====================

#[test]
fn test_connected_nodes_returns_records() {
    let doc = chain();
    let resp = FlowchartApi::new(&doc).connected_nodes(1, Some("A"));
    assert_eq!(resp.status, STATUS_OK);
    assert_eq!(
        resp.body,
        json!([
            { "id": "A", "name": "alpha" },
            { "id": "B", "name": "beta" },
            { "id": "C", "name": "gamma" },
        ])
    );
}

#[test]
fn test_connected_nodes_missing_start() {
    let doc = chain();
    let resp = FlowchartApi::new(&doc).connected_nodes(1, Some("Z"));
    assert_eq!(resp.status, STATUS_NOT_FOUND);
    assert_eq!(resp.body, json!({ "error": "Node not found." }));

    let resp = FlowchartApi::new(&doc).connected_nodes(1, None);
    assert_eq!(resp.status, STATUS_BAD_REQUEST);
}

#[test]
fn test_connected_nodes_over_relational_rows() {
    let store = RelationalStore {
        flowcharts: vec![FlowchartRow {
            id: 5,
            title: "Rows".to_string(),
            created_at: chrono::Utc::now(),
        }],
        nodes: vec![
            NodeRow {
                id: 1,
                flowchart_id: 5,
                name: "one".to_string(),
            },
            NodeRow {
                id: 2,
                flowchart_id: 5,
                name: "two".to_string(),
            },
        ],
        edges: vec![EdgeRow {
            id: 1,
            flowchart_id: 5,
            source_id: 2,
            target_id: 1,
        }],
    };
    let api = FlowchartApi::new(&store);
    let resp = api.connected_nodes(5, Some("2"));
    assert_eq!(resp.status, STATUS_OK);
    assert_eq!(resp.body.as_array().unwrap().len(), 2);
    assert_eq!(api.validate_graph(5).status, STATUS_OK);
}

// ==================== Update & Error Mapping Tests ====================

#[test]
fn test_update_flowchart_title_only() {
    let mut doc = chain();
    let resp = update_flowchart(&mut doc, &json!({ "title": "New", "data": {} }));
    assert_eq!(resp.status, STATUS_OK);
    assert_eq!(resp.body["title"], "New");
    assert_eq!(resp.body["data"]["edges"].as_array().unwrap().len(), 2);

    let resp = update_flowchart(&mut doc, &json!({ "title": 1 }));
    assert_eq!(resp.status, STATUS_BAD_REQUEST);
    assert_eq!(doc.title, "New");
}

#[test]
fn test_required_node_id() {
    assert_eq!(required_node_id(Some("A")).unwrap(), "A");
    assert!(matches!(
        required_node_id(Some("  ")),
        Err(FlowError::InvalidArgument(_))
    ));
}

#[test]
fn test_error_response_statuses() {
    let io = FlowError::Io(std::io::Error::other("disk"));
    assert_eq!(error_response(&io).status, 500);
    assert_eq!(
        error_response(&FlowError::FlowchartNotFound(3)).status,
        STATUS_NOT_FOUND
    );
    assert_eq!(
        error_response(&FlowError::InvalidArgument("bad".into())).body,
        json!({ "error": "bad" })
    );
}

// ==================== Editor Document Tests ====================

fn editor() -> Flowchart {
    Flowchart::new(3, "Editor").with_data(
        vec![
            Node::new("node-1")
                .with_field("data", json!({ "label": "Node 1" }))
                .with_field("position", json!({ "x": 1.0, "y": 2.0 })),
            Node::new("node-2")
                .with_field("data", json!({ "label": "Node 2" }))
                .with_field("position", json!({ "x": 3.0, "y": 4.0 })),
        ],
        vec![
            Edge::new("e1", "node-1", "node-2")
                .with_field("animated", json!(true))
                .with_field("style", json!({ "stroke": "red" })),
            Edge::new("e2", "node-2", "gone").with_field("animated", json!(false)),
        ],
    )
}

#[test]
fn test_update_flowchart_keeps_editor_fields() {
    let mut doc = editor();
    let resp = update_flowchart(&mut doc, &json!({ "title": "Renamed" }));
    assert_eq!(resp.status, STATUS_OK);
    assert_eq!(resp.body["title"], "Renamed");
    assert_eq!(
        resp.body["data"]["nodes"][0]["position"],
        json!({ "x": 1.0, "y": 2.0 })
    );
    assert_eq!(resp.body["data"]["nodes"][1]["data"]["label"], "Node 2");
    assert_eq!(
        resp.body["data"]["edges"][0]["style"],
        json!({ "stroke": "red" })
    );
    assert_eq!(doc.data, editor().data);
}

#[test]
fn test_connected_nodes_returns_full_records() {
    let doc = editor();
    let resp = FlowchartApi::new(&doc).connected_nodes(3, Some("node-1"));
    assert_eq!(resp.status, STATUS_OK);
    assert_eq!(resp.body[0]["data"]["label"], "Node 1");
    assert_eq!(resp.body[1]["position"], json!({ "x": 3.0, "y": 4.0 }));
}

#[test]
fn test_invalid_edges_returned_in_full() {
    let doc = editor();
    let resp = FlowchartApi::new(&doc).validate_graph(3);
    assert_eq!(resp.status, STATUS_BAD_REQUEST);
    assert_eq!(
        resp.body["invalid_edges"],
        json!([{ "id": "e2", "source": "node-2", "target": "gone", "animated": false }])
    );
}

#[test]
fn test_connected_nodes_in_document_order() {
    let doc = Flowchart::new(4, "Order").with_data(
        vec![Node::new("z"), Node::new("b"), Node::new("m"), Node::new("a")],
        vec![
            Edge::new("e1", "a", "m"),
            Edge::new("e2", "m", "z"),
            Edge::new("e3", "z", "b"),
        ],
    );
    let resp = FlowchartApi::new(&doc).connected_nodes(4, Some("a"));
    assert_eq!(
        resp.body,
        json!([{ "id": "z" }, { "id": "b" }, { "id": "m" }, { "id": "a" }])
    );
}
