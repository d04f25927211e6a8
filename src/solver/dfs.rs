use crate::maze_graph::MazeGraph;
use crate::solver::{backtrace, check_endpoints, SearchError};
use fxhash::{FxHashMap, FxHashSet};
use grid_util::point::Point;

/// Depth-first search with an explicit stack, so the depth of the maze is not bounded by the call
/// stack. A vertex keeps the predecessor that first pushed it.
pub fn dfs(graph: &MazeGraph, start: Point, end: Point) -> Result<Vec<Point>, SearchError> {
    if let Some(result) = check_endpoints(graph, start, end) {
        return result;
    }
    let mut stack = vec![start];
    let mut visited: FxHashSet<Point> = FxHashSet::default();
    let mut predecessors: FxHashMap<Point, Point> = FxHashMap::default();
    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if current == end {
            return Ok(backtrace(&predecessors, start, end));
        }
        for (neighbour, _) in graph.neighbours(&current) {
            if !visited.contains(&neighbour) {
                predecessors.entry(neighbour).or_insert(current);
                stack.push(neighbour);
            }
        }
    }
    Err(SearchError::NoPathFound { start, end })
}
