use crate::aggregate::{new_partial, PartialAggregate};
use crate::grid::GridIndex;
use crate::post::Post;
use crate::tags::TagExtractor;
use std::io::BufRead;

/// True if the line at `index` (1-based) belongs to worker `rank` out of
/// `size`. Round-robin over line numbers: stateless, and the ranks cover
/// every line exactly once.
pub fn owns_line(index: usize, rank: usize, size: usize) -> bool {
    index % size == rank
}

/// Scan the post stream and accumulate stats for the lines owned by this
/// rank.
///
/// Every worker streams the full source but only parses its own lines; the
/// ownership check is a cheap modulus on the line number. Lines that fail
/// to parse are skipped and counted nowhere. A post that matches no cell is
/// dropped from the aggregates.
pub fn scan_partition<R: BufRead>(
    grid: &GridIndex,
    reader: R,
    rank: usize,
    size: usize,
) -> PartialAggregate {
    let extractor = TagExtractor::new();
    let mut partial = new_partial(grid.len());

    for (number, line) in reader.lines().enumerate() {
        if !owns_line(number + 1, rank, size) {
            continue;
        }
        let line = match line {
            Ok(line) => line,
            Err(_) => continue,
        };
        let post = match Post::parse_line(&line) {
            Some(post) => post,
            None => continue,
        };
        if let Some(cell) = grid.locate(post.x, post.y) {
            partial[cell].record_post(extractor.extract(&post.text));
        }
    }

    partial
}
