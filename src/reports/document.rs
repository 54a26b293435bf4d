use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::NoDataError;

/// A named table of string cells: ordered headers, ordered rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The renderer-agnostic report output.
///
/// Constructed once per generation call, handed to the rendering sink, then
/// discarded; the engine keeps no reference to it. How it becomes a PDF, a
/// terminal dump, or an HTTP response body is entirely the sink's concern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    /// Human-readable summary of the filters applied, one line per entry.
    pub filters: Vec<String>,
    pub tables: Vec<Table>,
}

impl Document {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The external collaborator that turns a [`Document`] into a concrete
/// artifact. Layout, fonts, logos, and file output all live behind this
/// seam; sink failures are the sink's own and are not folded into engine
/// errors.
pub trait RenderSink {
    fn render(&mut self, document: &Document) -> anyhow::Result<()>;
}

/// Composes a document from already-built parts, stamping the generation
/// time. A report with no tables is not a valid output.
pub fn assemble(
    title: &str,
    filters: Vec<String>,
    tables: Vec<Table>,
) -> Result<Document, NoDataError> {
    if tables.is_empty() {
        return Err(NoDataError::EmptyDocument);
    }
    Ok(Document {
        title: title.to_string(),
        generated_at: Utc::now(),
        filters,
        tables,
    })
}
