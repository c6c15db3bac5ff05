//! Output surfaces for the answer tree: JSON and a per-path table.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::error::{BiohopError, Result};
use crate::resolve::AnswerNode;

/// Serialize the answer tree as pretty-printed JSON.
pub fn to_json(tree: &AnswerNode) -> Result<String> {
    serde_json::to_string_pretty(tree).map_err(|e| BiohopError::Parse(e.to_string()))
}

/// Render the answer tree as a table keyed by relation name.
///
/// Header cells are the query path's relations; each body row is one
/// root-to-leaf path, showing the resource reached at every hop. Branches
/// that terminated early on a sentinel leave their trailing cells blank.
pub fn render_table(tree: &AnswerNode, relations: &[String]) -> String {
    let mut builder = Builder::default();
    builder.push_record(relations.iter().map(String::as_str));

    for path in tree.paths() {
        let mut row: Vec<&str> = path.iter().map(|node| node.resource.as_str()).collect();
        row.resize(relations.len().max(row.len()), "");
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}
