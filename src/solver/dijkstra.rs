use crate::best_first::best_first;
use crate::maze_graph::MazeGraph;
use crate::solver::SearchError;
use grid_util::point::Point;

/// Least-weight path by Dijkstra's algorithm: best-first search without a heuristic.
pub fn dijkstra(graph: &MazeGraph, start: Point, end: Point) -> Result<Vec<Point>, SearchError> {
    best_first(graph, start, end, |_| 0)
}
