use criterion::{criterion_group, criterion_main, Criterion};
use maze_graph::{MazeGraph, PixelGrid, Strategy};
use rand::prelude::*;
use std::hint::black_box;

/// Maze carved by randomized depth-first search with `extra` walls removed afterwards, so the
/// weighted searches have several routes to choose from.
fn carved_maze(cols: usize, rows: usize, extra: usize, rng: &mut StdRng) -> PixelGrid {
    let (w, h) = (2 * cols + 1, 2 * rows + 1);
    let mut grid = PixelGrid::new(w, h, false);
    let mut seen = vec![false; cols * rows];
    let mut stack = vec![(0usize, 0usize)];
    seen[0] = true;
    grid.set(1, 1, true);
    while let Some(&(cx, cy)) = stack.last() {
        let options = [
            (cx.wrapping_sub(1), cy),
            (cx + 1, cy),
            (cx, cy.wrapping_sub(1)),
            (cx, cy + 1),
        ]
        .into_iter()
        .filter(|&(nx, ny)| nx < cols && ny < rows && !seen[ny * cols + nx])
        .collect::<Vec<_>>();
        match options.choose(rng) {
            Some(&(nx, ny)) => {
                seen[ny * cols + nx] = true;
                grid.set(2 * nx + 1, 2 * ny + 1, true);
                grid.set(cx + nx + 1, cy + ny + 1, true);
                stack.push((nx, ny));
            }
            None => {
                stack.pop();
            }
        }
    }
    for _ in 0..extra {
        let x = rng.gen_range(1..w - 1);
        let y = rng.gen_range(1..h - 1);
        if (x + y) % 2 == 1 {
            grid.set(x, y, true);
        }
    }
    grid.set(1, 0, true);
    grid.set(w - 2, h - 1, true);
    grid
}

fn build_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for size in [64, 256] {
        let grid = carved_maze(size, size, size * size / 10, &mut rng);
        c.bench_function(format!("build {size}x{size}").as_str(), |b| {
            b.iter(|| black_box(MazeGraph::from_grid(&grid)))
        });
    }
}

fn strategy_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for size in [64, 256] {
        let grid = carved_maze(size, size, size * size / 10, &mut rng);
        let graph = MazeGraph::from_grid(&grid).expect("generated maze has one entrance and exit");
        for strategy in Strategy::ALL {
            c.bench_function(format!("{size}x{size}, {strategy}").as_str(), |b| {
                b.iter(|| black_box(graph.solve(strategy)))
            });
        }
    }
}

criterion_group!(benches, build_bench, strategy_bench);
criterion_main!(benches);
