use crate::pixel_grid::MazeGrid;
use crate::{manhattan, FxIndexMap, Weight};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;
use thiserror::Error;

/// Reasons a pixel grid cannot be turned into a [MazeGraph].
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze of size {width}x{height} has no pixels to scan")]
    TooSmall { width: usize, height: usize },
    #[error("no entrance on the top border")]
    MissingEntrance,
    #[error("no exit on the bottom border")]
    MissingExit,
    #[error("more than one entrance on the top border: {first} and {second}")]
    MultipleEntrances { first: Point, second: Point },
    #[error("more than one exit on the bottom border: {first} and {second}")]
    MultipleExits { first: Point, second: Point },
}

#[derive(Clone, Debug)]
pub struct BuildOptions {
    /// Reject a border row with more than one opening instead of taking the leftmost one.
    pub strict_openings: bool,
}

impl Default for BuildOptions {
    fn default() -> BuildOptions {
        BuildOptions {
            strict_openings: true,
        }
    }
}

/// Undirected weighted graph of the junctions, dead ends, entrance and exit of a maze. Corridor
/// pixels between two vertices are folded into the weight of the edge joining them.
///
/// The graph is immutable after construction; any number of searches can share it.
#[derive(Clone, Debug)]
pub struct MazeGraph {
    adjacency: FxIndexMap<Point, FxIndexMap<Point, Weight>>,
    start: Point,
    end: Point,
    width: usize,
    height: usize,
    components: UnionFind<usize>,
}

impl MazeGraph {
    /// Builds the graph with the default [BuildOptions].
    pub fn from_grid<G: MazeGrid>(grid: &G) -> Result<MazeGraph, MazeError> {
        MazeGraphBuilder::new().build(grid)
    }

    pub fn start(&self) -> Point {
        self.start
    }
    pub fn end(&self) -> Point {
        self.end
    }
    /// Width of the scanned grid in pixels.
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height of the scanned grid in pixels.
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }
    pub fn contains(&self, vertex: &Point) -> bool {
        self.adjacency.contains_key(vertex)
    }
    /// Vertices in the order the scan discovered them.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.adjacency.keys().copied()
    }
    /// Neighbours of `vertex` with the weight of the connecting edge, in discovery order. Empty
    /// for a point that is not a vertex.
    pub fn neighbours(&self, vertex: &Point) -> impl Iterator<Item = (Point, Weight)> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter().map(|(&p, &w)| (p, w)))
    }
    pub fn weight(&self, from: &Point, to: &Point) -> Option<Weight> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Checks if both points are vertices on the same connected component.
    pub fn reachable(&self, from: &Point, to: &Point) -> bool {
        match (
            self.adjacency.get_index_of(from),
            self.adjacency.get_index_of(to),
        ) {
            (Some(from_ix), Some(to_ix)) => self.components.equiv(from_ix, to_ix),
            _ => false,
        }
    }
    pub fn unreachable(&self, from: &Point, to: &Point) -> bool {
        !self.reachable(from, to)
    }
}

/// Scans a [MazeGrid] once, top to bottom and left to right, and emits a vertex only where the
/// maze branches, turns, or ends.
#[derive(Clone, Debug, Default)]
pub struct MazeGraphBuilder {
    pub options: BuildOptions,
}

impl MazeGraphBuilder {
    pub fn new() -> MazeGraphBuilder {
        MazeGraphBuilder::default()
    }
    pub fn with_options(options: BuildOptions) -> MazeGraphBuilder {
        MazeGraphBuilder { options }
    }
    pub fn strict_openings(mut self, strict: bool) -> MazeGraphBuilder {
        self.options.strict_openings = strict;
        self
    }

    pub fn build<G: MazeGrid>(&self, grid: &G) -> Result<MazeGraph, MazeError> {
        let (width, height) = (grid.width(), grid.height());
        if width == 0 || height == 0 {
            return Err(MazeError::TooSmall { width, height });
        }
        let strict = self.options.strict_openings;
        let mut adjacency: FxIndexMap<Point, FxIndexMap<Point, Weight>> = FxIndexMap::default();

        let start = find_opening(grid, 0, strict)
            .map_err(|(first, second)| MazeError::MultipleEntrances { first, second })?
            .ok_or(MazeError::MissingEntrance)?;
        add_vertex(&mut adjacency, start);

        // Nearest vertex above each column whose downward corridor is still open.
        let mut column_vertex: Vec<Option<Point>> = vec![None; width];
        if height > 1 && grid.is_path(start.x as usize, 1) {
            column_vertex[start.x as usize] = Some(start);
        }

        for y in 1..height - 1 {
            // Vertex that opened the horizontal run the scan is currently inside of.
            let mut left_vertex: Option<Point> = None;
            for x in 1..width - 1 {
                if grid.is_path(x, y) {
                    scan_pixel(
                        grid,
                        x,
                        y,
                        &mut left_vertex,
                        &mut column_vertex,
                        &mut adjacency,
                    );
                }
            }
        }

        let end = find_opening(grid, height - 1, strict)
            .map_err(|(first, second)| MazeError::MultipleExits { first, second })?
            .ok_or(MazeError::MissingExit)?;
        add_vertex(&mut adjacency, end);
        if let Some(above) = column_vertex[end.x as usize] {
            add_edge(&mut adjacency, above, end);
        }

        let components = generate_components(&adjacency);
        let graph = MazeGraph {
            adjacency,
            start,
            end,
            width,
            height,
            components,
        };
        debug!(
            "Built maze graph with {} vertices and {} edges from a {}x{} grid",
            graph.vertex_count(),
            graph.edge_count(),
            width,
            height
        );
        Ok(graph)
    }
}

/// Open state of the four pixels around an interior path pixel.
#[derive(Clone, Copy, Debug)]
struct Neighbourhood {
    left: bool,
    right: bool,
    above: bool,
    below: bool,
}

impl Neighbourhood {
    fn of<G: MazeGrid>(grid: &G, x: usize, y: usize) -> Neighbourhood {
        Neighbourhood {
            left: grid.is_path(x - 1, y),
            right: grid.is_path(x + 1, y),
            above: grid.is_path(x, y - 1),
            below: grid.is_path(x, y + 1),
        }
    }

    /// False only for the inside of a straight corridor.
    fn is_vertex(&self) -> bool {
        match (self.left, self.right) {
            // Horizontal corridor unless a branch leaves it vertically.
            (true, true) => self.above || self.below,
            // Vertical corridor unless it is capped on one side.
            (false, false) => !self.above || !self.below,
            // A horizontal run starts or ends here.
            _ => true,
        }
    }
}

fn scan_pixel<G: MazeGrid>(
    grid: &G,
    x: usize,
    y: usize,
    left_vertex: &mut Option<Point>,
    column_vertex: &mut [Option<Point>],
    adjacency: &mut FxIndexMap<Point, FxIndexMap<Point, Weight>>,
) {
    let around = Neighbourhood::of(grid, x, y);
    if !around.is_vertex() {
        return;
    }
    let vertex = Point::new(x as i32, y as i32);
    add_vertex(adjacency, vertex);

    if around.left {
        if let Some(left) = *left_vertex {
            add_edge(adjacency, left, vertex);
        }
    }
    *left_vertex = if around.right { Some(vertex) } else { None };

    if around.above {
        if let Some(above) = column_vertex[x] {
            add_edge(adjacency, above, vertex);
        }
    }
    column_vertex[x] = if around.below { Some(vertex) } else { None };
}

/// Finds the opening in border row `y`, skipping the corner pixels. With `strict` set, a second
/// opening is returned as an error alongside the first.
fn find_opening<G: MazeGrid>(
    grid: &G,
    y: usize,
    strict: bool,
) -> Result<Option<Point>, (Point, Point)> {
    let mut openings = (1..grid.width().saturating_sub(1))
        .filter(|&x| grid.is_path(x, y))
        .map(|x| Point::new(x as i32, y as i32));
    let first = openings.next();
    if strict {
        if let (Some(first), Some(second)) = (first, openings.next()) {
            return Err((first, second));
        }
    }
    Ok(first)
}

fn add_vertex(adjacency: &mut FxIndexMap<Point, FxIndexMap<Point, Weight>>, vertex: Point) {
    adjacency.entry(vertex).or_default();
}

fn add_edge(adjacency: &mut FxIndexMap<Point, FxIndexMap<Point, Weight>>, a: Point, b: Point) {
    let weight = manhattan(&a, &b);
    adjacency.entry(a).or_default().insert(b, weight);
    adjacency.entry(b).or_default().insert(a, weight);
}

/// Links the vertices of every edge into the same component, keyed by adjacency index.
fn generate_components(
    adjacency: &FxIndexMap<Point, FxIndexMap<Point, Weight>>,
) -> UnionFind<usize> {
    let mut components = UnionFind::new(adjacency.len());
    for (ix, neighbours) in adjacency.values().enumerate() {
        for neighbour in neighbours.keys() {
            if let Some(neighbour_ix) = adjacency.get_index_of(neighbour) {
                components.union(ix, neighbour_ix);
            }
        }
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_grid::PixelGrid;

    fn build(text: &str) -> MazeGraph {
        MazeGraph::from_grid(&PixelGrid::from_ascii(text)).unwrap()
    }

    /// A single open column collapses into one edge between entrance and exit.
    #[test]
    fn straight_corridor_has_two_vertices() {
        let graph = build(
            "#.#
             #.#
             #.#
             #.#
             #.#"
            .replace(' ', "")
            .as_str(),
        );
        assert_eq!(graph.start(), Point::new(1, 0));
        assert_eq!(graph.end(), Point::new(1, 4));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(&Point::new(1, 0), &Point::new(1, 4)), Some(4));
        assert_eq!(graph.weight(&Point::new(1, 4), &Point::new(1, 0)), Some(4));
    }

    #[test]
    fn corridor_length_becomes_weight() {
        for n in 2..12 {
            let grid = PixelGrid::from_ascii(&"#.#\n".repeat(n));
            let graph = MazeGraph::from_grid(&grid).unwrap();
            assert_eq!(graph.vertex_count(), 2);
            assert_eq!(graph.weight(&graph.start(), &graph.end()), Some(n as Weight - 1));
        }
    }

    #[test]
    fn right_angle_turn() {
        // Down from the entrance, right along row 2, then one step down to the exit.
        let graph = build("#.###\n#.###\n#...#\n###.#\n");
        let turn = Point::new(1, 2);
        let run_end = Point::new(3, 2);
        assert_eq!(
            graph.vertices().collect::<Vec<_>>(),
            vec![Point::new(1, 0), turn, run_end, Point::new(3, 3)]
        );
        assert_eq!(graph.weight(&graph.start(), &turn), Some(2));
        assert_eq!(graph.weight(&turn, &run_end), Some(2));
        assert_eq!(graph.weight(&run_end, &graph.end()), Some(1));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn junctions_and_dead_ends_are_vertices() {
        let graph = build(
            "###.###\n\
             #.....#\n\
             #.#.#.#\n\
             ###.###\n",
        );
        // T-junction below the entrance, two run ends with dead ends below them.
        for v in [(3, 1), (1, 1), (5, 1), (1, 2), (5, 2), (3, 3)] {
            assert!(graph.contains(&Point::new(v.0, v.1)), "missing {:?}", v);
        }
        // The vertical stub under the junction is a corridor pixel.
        assert!(!graph.contains(&Point::new(3, 2)));
        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.weight(&Point::new(3, 1), &Point::new(3, 3)), Some(2));
        assert_eq!(graph.neighbours(&Point::new(3, 1)).count(), 4);
        assert!(graph.reachable(&Point::new(1, 2), &graph.end()));
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = build(
            "#.#####\n\
             #.....#\n\
             #.###.#\n\
             #.....#\n\
             #####.#\n",
        );
        for v in graph.vertices() {
            for (n, w) in graph.neighbours(&v) {
                assert_eq!(graph.weight(&n, &v), Some(w));
                assert!(n.x == v.x || n.y == v.y);
            }
        }
    }

    #[test]
    fn missing_openings() {
        let closed_top = PixelGrid::from_ascii("###\n#.#\n#.#\n");
        assert_eq!(
            MazeGraph::from_grid(&closed_top).unwrap_err(),
            MazeError::MissingEntrance
        );
        let closed_bottom = PixelGrid::from_ascii("#.#\n#.#\n###\n");
        assert_eq!(
            MazeGraph::from_grid(&closed_bottom).unwrap_err(),
            MazeError::MissingExit
        );
        assert_eq!(
            MazeGraph::from_grid(&PixelGrid::new(0, 3, true)).unwrap_err(),
            MazeError::TooSmall {
                width: 0,
                height: 3
            }
        );
    }

    #[test]
    fn multiple_openings() {
        let grid = PixelGrid::from_ascii("#.#.#\n#...#\n##.##\n");
        assert_eq!(
            MazeGraph::from_grid(&grid).unwrap_err(),
            MazeError::MultipleEntrances {
                first: Point::new(1, 0),
                second: Point::new(3, 0)
            }
        );
        let graph = MazeGraphBuilder::new()
            .strict_openings(false)
            .build(&grid)
            .unwrap();
        assert_eq!(graph.start(), Point::new(1, 0));
        assert_eq!(graph.end(), Point::new(2, 2));
        assert!(graph.reachable(&graph.start(), &graph.end()));
    }

    #[test]
    fn single_row_maze_starts_at_its_exit() {
        let graph = build("#.#\n");
        assert_eq!(graph.start(), graph.end());
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    /// The exit directly below a walled-off entrance must not be joined to it.
    #[test]
    fn no_edge_through_a_wall_below_the_entrance() {
        let graph = build("#.#\n###\n#.#\n");
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.unreachable(&graph.start(), &graph.end()));
    }

    #[test]
    fn disconnected_exit_is_unreachable() {
        let graph = build("#.###\n#.###\n#####\n###.#\n###.#\n");
        assert!(graph.unreachable(&graph.start(), &graph.end()));
        assert!(!graph.reachable(&graph.start(), &Point::new(9, 9)));
    }
}
