//! Writes JSON flowchart documents.

use std::io::Write;
use std::path::Path;

use crate::types::{FlowResult, Flowchart};

/// Writer for JSON flowchart documents.
pub struct DocumentWriter {
    pretty: bool,
}

impl DocumentWriter {
    /// Create a writer producing compact JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a writer producing indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Write a flowchart document to a file, replacing its contents.
    pub fn write_to_file(&self, flowchart: &Flowchart, path: &Path) -> FlowResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(flowchart, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a flowchart document to any writer.
    pub fn write_to(&self, flowchart: &Flowchart, writer: &mut impl Write) -> FlowResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, flowchart)?;
        } else {
            serde_json::to_writer(&mut *writer, flowchart)?;
        }
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}
