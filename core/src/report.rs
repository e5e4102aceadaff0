use serde::{Deserialize, Serialize};
use std::fmt;

/// Final summary for one cell: its post count and ranked tag list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSummary {
    pub id: String,
    pub count: u64,
    pub tags: Vec<(String, u64)>,
}

/// The merged, ranked output of a full run. The `Display` rendering is the
/// human-readable report; it carries no semantics of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub cells: Vec<CellSummary>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, cell) in self.cells.iter().enumerate() {
            let separator = if position + 1 < self.cells.len() { "," } else { "" };
            writeln!(f, "{}: {} posts{}", cell.id, cell.count, separator)?;
        }
        for cell in &self.cells {
            if cell.tags.is_empty() {
                writeln!(f, "{}: ", cell.id)?;
            } else {
                let entries: Vec<String> = cell
                    .tags
                    .iter()
                    .map(|(tag, occurrences)| format!("({}, {})", tag, occurrences))
                    .collect();
                writeln!(f, "{}: ({})", cell.id, entries.join(","))?;
            }
        }
        Ok(())
    }
}
