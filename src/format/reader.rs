//! Reads JSON flowchart documents.

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::types::{FlowResult, Flowchart};

/// Reader for JSON flowchart documents.
pub struct DocumentReader;

impl DocumentReader {
    /// Read a flowchart document from a file.
    pub fn read_from_file(path: &Path) -> FlowResult<Flowchart> {
        let data = std::fs::read(path)?;
        let flowchart = Self::read_from_slice(&data)?;
        debug!(
            "read flowchart {} from {} ({} nodes, {} edges)",
            flowchart.id,
            path.display(),
            flowchart.data.nodes.len(),
            flowchart.data.edges.len()
        );
        Ok(flowchart)
    }

    /// Read a flowchart document from any reader.
    pub fn read_from(reader: &mut impl Read) -> FlowResult<Flowchart> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::read_from_slice(&data)
    }

    /// Parse a flowchart document from bytes.
    pub fn read_from_slice(data: &[u8]) -> FlowResult<Flowchart> {
        Ok(serde_json::from_slice(data)?)
    }
}
