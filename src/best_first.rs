//! Weighted best-first search shared by Dijkstra and A*. The open set is an indexed
//! [PriorityQueue], so a vertex whose distance improves has its entry lowered in place instead of
//! being pushed a second time. The queue therefore never holds more entries than the graph has
//! vertices.
use crate::maze_graph::MazeGraph;
use crate::priority_queue::PriorityQueue;
use crate::solver::{backtrace, check_endpoints, SearchError};
use crate::Weight;
use fxhash::{FxHashMap, FxHashSet};
use grid_util::point::Point;
use log::debug;

/// Expands vertices in order of `distance + heuristic(vertex)` until `end` is dequeued. The
/// heuristic must never overestimate the remaining distance and must not change between calls
/// for the same vertex, otherwise a queued priority could rise.
pub(crate) fn best_first<FH>(
    graph: &MazeGraph,
    start: Point,
    end: Point,
    mut heuristic: FH,
) -> Result<Vec<Point>, SearchError>
where
    FH: FnMut(&Point) -> Weight,
{
    if let Some(result) = check_endpoints(graph, start, end) {
        return result;
    }
    let mut distances: FxHashMap<Point, Weight> = FxHashMap::default();
    let mut predecessors: FxHashMap<Point, Point> = FxHashMap::default();
    let mut visited: FxHashSet<Point> = FxHashSet::default();
    let mut open = PriorityQueue::with_capacity(graph.vertex_count());

    distances.insert(start, 0);
    open.enqueue(start, 0)?;
    while !open.is_empty() {
        let current = open.dequeue()?;
        if current == end {
            return Ok(backtrace(&predecessors, start, end));
        }
        visited.insert(current);
        let Some(&distance) = distances.get(&current) else {
            continue;
        };
        for (neighbour, weight) in graph.neighbours(&current) {
            if visited.contains(&neighbour) {
                continue;
            }
            let new_distance = distance + weight;
            let improved = distances
                .get(&neighbour)
                .map_or(true, |&known| new_distance < known);
            if improved {
                distances.insert(neighbour, new_distance);
                predecessors.insert(neighbour, current);
                open.enqueue(neighbour, new_distance + heuristic(&neighbour))?;
            }
        }
    }
    debug!(
        "Exhausted {} vertices without reaching {}",
        visited.len(),
        end
    );
    Err(SearchError::NoPathFound { start, end })
}
