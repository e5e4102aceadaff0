use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate for one grid cell, owned by a single worker until the merge
/// barrier: a post count and a tag frequency table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellStats {
    pub count: u64,
    pub tags: HashMap<String, u64>,
}

impl CellStats {
    /// Count one matched post and its tags.
    pub fn record_post<I>(&mut self, tags: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.count += 1;
        for tag in tags {
            *self.tags.entry(tag).or_insert(0) += 1;
        }
    }

    /// Fold another worker's stats for the same cell into this one:
    /// counts add, tag tables merge by key-wise addition.
    pub fn absorb(&mut self, other: CellStats) {
        self.count += other.count;
        for (tag, occurrences) in other.tags {
            *self.tags.entry(tag).or_insert(0) += occurrences;
        }
    }
}

/// One stats slot per grid cell, positionally aligned with the grid index.
pub type PartialAggregate = Vec<CellStats>;

/// Empty aggregate with one slot per cell.
pub fn new_partial(num_cells: usize) -> PartialAggregate {
    vec![CellStats::default(); num_cells]
}

/// Merge all workers' partial aggregates into one.
///
/// Position `i` in every partial refers to the same cell. Addition is
/// associative and commutative, so the result does not depend on worker
/// count or on the order the partials were gathered in.
pub fn merge_partials(partials: Vec<PartialAggregate>, num_cells: usize) -> PartialAggregate {
    let mut merged = new_partial(num_cells);
    for partial in partials {
        for (slot, stats) in merged.iter_mut().zip(partial) {
            slot.absorb(stats);
        }
    }
    merged
}
