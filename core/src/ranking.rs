use crate::aggregate::CellStats;
use crate::grid::GridIndex;
use crate::report::{CellSummary, Report};
use std::collections::HashMap;

/// How many leading tags each cell reports; ties at the cut are kept.
const TAG_RANK_DEPTH: usize = 5;

/// Order a tag table by descending frequency.
///
/// Equal frequencies fall back to lexicographic order so the ranking is
/// reproducible run to run instead of following map iteration order.
pub fn rank_tags(tags: &HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = tags
        .iter()
        .map(|(tag, &occurrences)| (tag.clone(), occurrences))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Keep the leading `TAG_RANK_DEPTH` tags plus every tag tied with the
/// last one kept; a shorter table is returned whole.
pub fn top_tags_with_ties(ranked: Vec<(String, u64)>) -> Vec<(String, u64)> {
    if ranked.len() <= TAG_RANK_DEPTH {
        return ranked;
    }
    let cutoff = ranked[TAG_RANK_DEPTH - 1].1;
    ranked
        .into_iter()
        .take_while(|(_, occurrences)| *occurrences >= cutoff)
        .collect()
}

/// Build the final report from the merged aggregates: cells ordered by
/// descending post count (the sort is stable, so grid-file order breaks
/// ties), each cell carrying its ranked tag list.
pub fn build_report(grid: &GridIndex, merged: Vec<CellStats>) -> Report {
    let mut cells: Vec<CellSummary> = grid
        .cells()
        .iter()
        .zip(merged)
        .map(|(cell, stats)| CellSummary {
            id: cell.id.clone(),
            count: stats.count,
            tags: top_tags_with_ties(rank_tags(&stats.tags)),
        })
        .collect();
    cells.sort_by(|a, b| b.count.cmp(&a.count));
    Report { cells }
}
