use maze_graph::{path_weight, waypoints_to_path, MazeGraph, PixelGrid, Strategy};

// A small maze with two routes from the entrance (top) to the exit (bottom):
// - # marks a wall
// - . marks a path pixel
//
// Pass a strategy name (dfs, bfs, dijkstra, astar) to run only that one.

const MAZE: &str = "
###.###########
###...........#
###.#########.#
#...#########.#
#.###########.#
#...#########.#
###.#########.#
###...........#
###.###########
";

fn main() {
    let grid = PixelGrid::from_ascii(MAZE);
    println!("{}", grid);
    let graph = match MazeGraph::from_grid(&grid) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Could not read maze: {e}");
            return;
        }
    };
    println!(
        "{} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    let strategies = match std::env::args().nth(1) {
        Some(name) => match name.parse::<Strategy>() {
            Ok(strategy) => vec![strategy],
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        },
        None => Strategy::ALL.to_vec(),
    };
    for strategy in strategies {
        match graph.solve(strategy) {
            Ok(path) => {
                let weight = path_weight(&graph, &path).unwrap_or_default();
                println!("{strategy}: {} vertices, length {weight}", path.len());
                println!(
                    "  {}",
                    path.iter()
                        .map(|p| format!("({}, {})", p.x, p.y))
                        .collect::<Vec<_>>()
                        .join(" -> ")
                );
                println!("  {} pixels", waypoints_to_path(&path).len());
            }
            Err(e) => println!("{strategy}: {e}"),
        }
    }
}
