use core::fmt;

/// Read access to a binary maze image, as produced by an image decoder. `is_path` is only called
/// with `x < width()` and `y < height()`.
pub trait MazeGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// [true] for an open (path) pixel, [false] for a wall.
    fn is_path(&self, x: usize, y: usize) -> bool;
}

/// Owned row-major grid of path flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: usize,
    pub height: usize,
    cells: Vec<bool>,
}

impl PixelGrid {
    /// Creates a grid where every pixel is `path`.
    pub fn new(width: usize, height: usize, path: bool) -> PixelGrid {
        PixelGrid {
            width,
            height,
            cells: vec![path; width * height],
        }
    }

    /// Parses a maze drawn with `#` for walls and any other character for paths. Lines shorter
    /// than the longest one are padded with walls.
    pub fn from_ascii(text: &str) -> PixelGrid {
        let rows = text
            .lines()
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut grid = PixelGrid::new(width, rows.len(), false);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                grid.set(x, y, c != '#');
            }
        }
        grid
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.get_ix(x, y)]
    }
    pub fn set(&mut self, x: usize, y: usize, path: bool) {
        let ix = self.get_ix(x, y);
        self.cells[ix] = path;
    }
    fn get_ix(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }
}

impl MazeGrid for PixelGrid {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn is_path(&self, x: usize, y: usize) -> bool {
        self.get(x, y)
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            let row = (0..self.width)
                .map(|x| if self.get(x, y) { '.' } else { '#' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Adapts a predicate over pixel coordinates, e.g. a lookup into a decoded image buffer.
pub struct FnGrid<F> {
    width: usize,
    height: usize,
    is_path: F,
}

impl<F> FnGrid<F>
where
    F: Fn(usize, usize) -> bool,
{
    pub fn new(width: usize, height: usize, is_path: F) -> FnGrid<F> {
        FnGrid {
            width,
            height,
            is_path,
        }
    }
}

impl<F> MazeGrid for FnGrid<F>
where
    F: Fn(usize, usize) -> bool,
{
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn is_path(&self, x: usize, y: usize) -> bool {
        (self.is_path)(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trips_through_display() {
        let text = "#.#\n#.#\n#.#\n";
        let grid = PixelGrid::from_ascii(text);
        assert_eq!((grid.width, grid.height), (3, 3));
        assert!(grid.is_path(1, 2));
        assert!(!grid.is_path(0, 0));
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn short_lines_are_padded_with_walls() {
        let grid = PixelGrid::from_ascii("#.###\n#.\n");
        assert_eq!(grid.width, 5);
        assert!(grid.is_path(1, 1));
        assert!(!grid.is_path(4, 1));
    }

    #[test]
    fn fn_grid_forwards_predicate() {
        let grid = FnGrid::new(3, 3, |x, _| x == 1);
        assert_eq!(grid.width(), 3);
        assert!(grid.is_path(1, 0));
        assert!(!grid.is_path(2, 2));
    }
}
