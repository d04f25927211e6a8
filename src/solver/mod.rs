use crate::heap::HeapError;
use crate::maze_graph::MazeGraph;
use crate::Weight;
use core::fmt;
use fxhash::FxHashMap;
use grid_util::point::Point;
use itertools::Itertools;
use log::info;
use std::str::FromStr;
use thiserror::Error;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("no path from {start} to {end}")]
    NoPathFound { start: Point, end: Point },
    /// The open set rejected an operation; only possible if it was sized too small.
    #[error("priority queue failure: {0}")]
    Queue(#[from] HeapError),
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown search strategy `{0}`, expected one of dfs, bfs, dijkstra, astar")]
pub struct ParseStrategyError(pub String);

/// The four interchangeable search algorithms. All share the signature of
/// [search](Strategy::search).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Iterative depth-first search. Finds some path, not a short one.
    DepthFirst,
    /// Breadth-first search. Finds a path with the fewest edges.
    BreadthFirst,
    /// Finds a path of least total weight.
    Dijkstra,
    /// Dijkstra guided by the Manhattan distance to the end. Finds a path of least total weight.
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::Dijkstra,
        Strategy::AStar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::Dijkstra => "dijkstra",
            Strategy::AStar => "astar",
        }
    }

    /// Whether the returned path is guaranteed to have the least total weight.
    pub fn is_weight_optimal(&self) -> bool {
        matches!(self, Strategy::Dijkstra | Strategy::AStar)
    }

    /// Finds a path from `start` to `end`, both inclusive.
    pub fn search(
        &self,
        graph: &MazeGraph,
        start: Point,
        end: Point,
    ) -> Result<Vec<Point>, SearchError> {
        match self {
            Strategy::DepthFirst => dfs(graph, start, end),
            Strategy::BreadthFirst => bfs(graph, start, end),
            Strategy::Dijkstra => dijkstra(graph, start, end),
            Strategy::AStar => astar(graph, start, end),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dijkstra" => Ok(Strategy::Dijkstra),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_owned())),
        }
    }
}

impl MazeGraph {
    /// Solves the maze from its entrance to its exit. Returns early without searching if the two
    /// lie on different components.
    pub fn solve(&self, strategy: Strategy) -> Result<Vec<Point>, SearchError> {
        let (start, end) = (self.start(), self.end());
        if start != end && self.unreachable(&start, &end) {
            info!("{} is not reachable from {}", end, start);
            return Err(SearchError::NoPathFound { start, end });
        }
        strategy.search(self, start, end)
    }
}

/// Handles the cases every strategy answers without searching: equal endpoints, and endpoints that
/// are not vertices of the graph.
pub(crate) fn check_endpoints(
    graph: &MazeGraph,
    start: Point,
    end: Point,
) -> Option<Result<Vec<Point>, SearchError>> {
    if start == end {
        Some(Ok(vec![start]))
    } else if !graph.contains(&start) || !graph.contains(&end) {
        Some(Err(SearchError::NoPathFound { start, end }))
    } else {
        None
    }
}

/// Follows `predecessors` back from `end` to `start` and returns the path in forward order.
///
/// The chain must lead to `start` without cycles; this is not checked.
pub fn backtrace(predecessors: &FxHashMap<Point, Point>, start: Point, end: Point) -> Vec<Point> {
    let mut path = std::iter::successors(Some(end), |vertex| {
        if *vertex == start {
            None
        } else {
            predecessors.get(vertex).copied()
        }
    })
    .collect::<Vec<Point>>();
    path.reverse();
    debug_assert_eq!(path.first(), Some(&start));
    path
}

/// Total weight of a path through the graph, or [None] if two consecutive vertices are not
/// joined by an edge.
pub fn path_weight(graph: &MazeGraph, path: &[Point]) -> Option<Weight> {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| graph.weight(a, b))
        .sum()
}
