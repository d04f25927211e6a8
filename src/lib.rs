//! # maze_graph
//!
//! Solves mazes given as binary pixel grids, with walls on the border except for one entrance
//! in the top row and one exit in the bottom row. A single scan of the grid
//! ([MazeGraphBuilder]) compresses it into a sparse weighted graph holding only the entrance,
//! the exit, junctions, corners and dead ends. Straight corridors become edges weighted by
//! their length. The graph is then searched with one of four [Strategy] variants:
//! depth-first, breadth-first, Dijkstra or A*. The weighted strategies run on an indexed binary
//! heap with decrease-key ([heap::IndexedMinHeap]).
//!
//! ```
//! use maze_graph::{MazeGraph, PixelGrid, Strategy};
//!
//! let grid = PixelGrid::from_ascii("#.#\n#.#\n#.#\n");
//! let graph = MazeGraph::from_grid(&grid).unwrap();
//! let path = graph.solve(Strategy::AStar).unwrap();
//! assert_eq!(path.len(), 2);
//! ```
mod best_first;
pub mod heap;
pub mod maze_graph;
pub mod pixel_grid;
pub mod priority_queue;
pub mod solver;

pub use crate::maze_graph::{BuildOptions, MazeError, MazeGraph, MazeGraphBuilder};
pub use crate::pixel_grid::{FnGrid, MazeGrid, PixelGrid};
pub use crate::solver::{backtrace, path_weight, SearchError, Strategy};
pub use grid_util::point::Point;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use itertools::Itertools;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Edge weight: the number of pixel steps between two vertices.
pub type Weight = u32;

/// Manhattan distance between two pixels, which is the exact corridor length between vertices
/// sharing a row or column.
pub(crate) fn manhattan(a: &Point, b: &Point) -> Weight {
    a.manhattan_distance(b) as Weight
}

/// Turns a vertex path into the full list of pixels it passes through, e.g. for painting the
/// solution onto the maze image. Consecutive waypoints are expected to share a row or column, as
/// every edge of a [MazeGraph] does.
pub fn waypoints_to_path(waypoints: &[Point]) -> Vec<Point> {
    let mut path: Vec<Point> = Vec::new();
    if let Some(&first) = waypoints.first() {
        path.push(first);
    }
    for (from, to) in waypoints.iter().tuple_windows() {
        let mut current = *from;
        while current != *to {
            current = Point::new(
                current.x + (to.x - current.x).signum(),
                current.y + (to.y - current.y).signum(),
            );
            path.push(current);
        }
    }
    path
}
