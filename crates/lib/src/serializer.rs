//! # Table Serializer
//!
//! Renders full table contents into the compact textual form embedded in the
//! model prompt. The rendering is lossless: every column appears under its
//! stored name, rows keep primary-key order, and no row limit is applied.
//! The model is instructed to answer only from this literal text, so nothing
//! may be paraphrased or abbreviated here.
//!
//! With no row limit, serialized context grows linearly with the dataset
//! (roughly 130 bytes per row). That is the prompt-size ceiling of this
//! design: acceptable for datasets up to a few thousand rows, after which
//! model context windows become the binding constraint.

use crate::errors::PipelineError;
use serde_json::Value;

/// One logical table exposed to the model as context.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    /// The SQL table name.
    pub table: &'static str,
    /// The human-readable name used in the prompt.
    pub label: &'static str,
    /// The column that defines the natural retrieval order.
    pub primary_key: &'static str,
}

/// The three tables injected, in full, into every data-dependent prompt.
pub const CONTEXT_TABLES: [TableSpec; 3] = [
    TableSpec {
        table: "Sample",
        label: "Samples",
        primary_key: "sample_id",
    },
    TableSpec {
        table: "Nile_red",
        label: "Nile Red Tests",
        primary_key: "test_id",
    },
    TableSpec {
        table: "Rhodamine_B",
        label: "Rhodamine B Tests",
        primary_key: "test_id",
    },
];

/// Renders one table as a single line: the label followed by its rows as a
/// JSON array of records. `serde_json` object maps keep a stable key order,
/// so identical data yields byte-identical output.
pub fn render_table(spec: &TableSpec, rows: &[Value]) -> Result<String, PipelineError> {
    Ok(format!("{}: {}", spec.label, serde_json::to_string(rows)?))
}
