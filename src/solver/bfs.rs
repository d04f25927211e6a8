use crate::maze_graph::MazeGraph;
use crate::solver::{backtrace, check_endpoints, SearchError};
use fxhash::{FxHashMap, FxHashSet};
use grid_util::point::Point;
use std::collections::VecDeque;

/// Breadth-first search. The path has the fewest edges of any path, regardless of their weight.
pub fn bfs(graph: &MazeGraph, start: Point, end: Point) -> Result<Vec<Point>, SearchError> {
    if let Some(result) = check_endpoints(graph, start, end) {
        return result;
    }
    let mut queue = VecDeque::from([start]);
    let mut visited: FxHashSet<Point> = FxHashSet::default();
    let mut predecessors: FxHashMap<Point, Point> = FxHashMap::default();
    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        if current == end {
            return Ok(backtrace(&predecessors, start, end));
        }
        for (neighbour, _) in graph.neighbours(&current) {
            if !visited.contains(&neighbour) {
                predecessors.entry(neighbour).or_insert(current);
                queue.push_back(neighbour);
            }
        }
    }
    Err(SearchError::NoPathFound { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_grid::PixelGrid;
    use crate::solver::path_weight;

    /// Five edges around the outside beat seven edges through the zigzag, although the zigzag is
    /// far lighter.
    #[test]
    fn fewest_edges_over_least_weight() {
        let grid = PixelGrid::from_ascii(
            "###.###########\n\
             ###...........#\n\
             ###.#########.#\n\
             #...#########.#\n\
             #.###########.#\n\
             #...#########.#\n\
             ###.#########.#\n\
             ###...........#\n\
             ###.###########\n",
        );
        let graph = MazeGraph::from_grid(&grid).unwrap();
        let path = bfs(&graph, graph.start(), graph.end()).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(3, 0),
                Point::new(3, 1),
                Point::new(13, 1),
                Point::new(13, 7),
                Point::new(3, 7),
                Point::new(3, 8)
            ]
        );
        assert_eq!(path_weight(&graph, &path), Some(28));
    }
}
