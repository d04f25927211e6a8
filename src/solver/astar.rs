use crate::best_first::best_first;
use crate::maze_graph::MazeGraph;
use crate::solver::SearchError;
use crate::{manhattan, Weight};
use fxhash::FxHashMap;
use grid_util::point::Point;

/// Least-weight path by A*. The heuristic is the Manhattan distance to `end`, which never
/// overestimates on a 4-connected grid and is consistent, so the first time `end` is dequeued its
/// path is optimal. Each vertex's estimate is computed once.
pub fn astar(graph: &MazeGraph, start: Point, end: Point) -> Result<Vec<Point>, SearchError> {
    let mut estimates: FxHashMap<Point, Weight> = FxHashMap::default();
    best_first(graph, start, end, |point| {
        *estimates
            .entry(*point)
            .or_insert_with(|| manhattan(point, &end))
    })
}
