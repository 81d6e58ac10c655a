use crate::{Cell, Direction, Error, GridConfig, Metric, PixelBuffer, SpatialIndex, State};

/// An opaque handle to a [`Grid`] element: its flat row-major index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(u32);

/// A regular partitioning of an image into equal-sized square cells.
///
/// Built once from a [`PixelBuffer`] and immutable thereafter; `rows * cols`
/// [`Cell`]s are stored in a flat, row-major `Vec`, addressable by flat
/// index or by `(row, col)`.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: u32,
    rows: u32,
    cell_size: u32,
    cells: Vec<Cell>,
    allow_diagonal: bool,
}

impl Grid {
    /// Build a grid over `pixels`, classifying each `min_size x min_size`
    /// tile against `passable`/`blocked`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the image's width or height is
    /// not a multiple of `config.grid.min_size`.
    pub fn build(
        pixels: &PixelBuffer,
        config: &GridConfig,
        allow_diagonal: bool,
        passable: [u8; 3],
        blocked: [u8; 3],
    ) -> Result<Self, Error> {
        let size = config.min_size;
        if pixels.width() % size != 0 {
            return Err(Error::InvalidDimensions {
                side: "width",
                size: pixels.width(),
                min_size: size,
            });
        }
        if pixels.height() % size != 0 {
            return Err(Error::InvalidDimensions {
                side: "height",
                size: pixels.height(),
                min_size: size,
            });
        }

        let cols = pixels.width() / size;
        let rows = pixels.height() / size;
        let mut cells = Vec::with_capacity((rows * cols) as usize);

        for row in 0..rows {
            for col in 0..cols {
                let x = (col * size) as i32;
                let y = (row * size) as i32;
                let state = pixels.classify(x, y, size as i32, size as i32, passable, blocked);
                cells.push(Cell::new(x, y, size as i32, size as i32, state));
            }
        }

        tracing::debug!(rows, cols, cell_size = size, "grid built");

        Ok(Self {
            cols,
            rows,
            cell_size: size,
            cells,
            allow_diagonal,
        })
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Total number of cells in this grid (`rows * cols`).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every element id in the grid, in row-major order.
    #[must_use]
    pub fn ids(&self) -> impl Iterator<Item = GridId> + '_ {
        (0..self.cells.len() as u32).map(GridId)
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> u32 {
        row * self.cols + col
    }

    #[inline]
    fn row_col(&self, id: GridId) -> (u32, u32) {
        let row = id.0 / self.cols;
        let col = id.0 - row * self.cols;
        (row, col)
    }

    fn cardinal_neighbor(&self, row: u32, col: u32, direction: Direction) -> Option<GridId> {
        let (dr, dc) = direction.row_col_delta();
        let r = row as i64 + dr as i64;
        let c = col as i64 + dc as i64;
        if r < 0 || c < 0 || r >= self.rows as i64 || c >= self.cols as i64 {
            return None;
        }
        Some(GridId(self.index(r as u32, c as u32)))
    }
}

impl SpatialIndex for Grid {
    type Id = GridId;

    fn get(&self, x: i32, y: i32) -> Result<GridId, Error> {
        if x < 0 || y < 0 || x as u32 >= self.cols * self.cell_size || y as u32 >= self.rows * self.cell_size {
            return Err(Error::OutOfBounds { x: x as i64, y: y as i64 });
        }
        let row = (y as u32) / self.cell_size;
        let col = (x as u32) / self.cell_size;
        Ok(GridId(self.index(row, col)))
    }

    fn neighbors(&self, id: GridId) -> Vec<GridId> {
        let (row, col) = self.row_col(id);
        let dirs: &[Direction] = if self.allow_diagonal {
            &Direction::ALL
        } else {
            &Direction::CARDINAL
        };
        dirs.iter()
            .filter_map(|d| self.cardinal_neighbor(row, col, *d))
            .filter(|n| self.cells[n.0 as usize].state().is_passable())
            .collect()
    }

    fn cost(&self, a: GridId, b: GridId, metric: Metric) -> f64 {
        let ca = self.cells[a.0 as usize].center();
        let cb = self.cells[b.0 as usize].center();
        metric.distance((ca.x - cb.x) as f64, (ca.y - cb.y) as f64)
    }

    fn heuristic(&self, a: GridId, b: GridId, metric: Metric) -> f64 {
        self.cost(a, b, metric)
    }

    fn cell(&self, id: GridId) -> Cell {
        self.cells[id.0 as usize]
    }

    fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    fn neighbors_in_direction(&self, id: GridId, direction: Direction) -> Vec<GridId> {
        if direction.is_diagonal() && !self.allow_diagonal {
            return Vec::new();
        }
        let (row, col) = self.row_col(id);
        self.cardinal_neighbor(row, col, direction)
            .filter(|n| self.cells[n.0 as usize].state().is_passable())
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn uniform_buffer(w: u32, h: u32) -> PixelBuffer {
        PixelBuffer::filled(w, h, [255, 255, 255])
    }

    #[test]
    fn test_invalid_dimensions() {
        let buf = uniform_buffer(25, 20);
        let err = Grid::build(&buf, &GridConfig { min_size: 10 }, false, [255, 255, 255], [0, 0, 0])
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDimensions {
                side: "width",
                size: 25,
                min_size: 10
            }
        );
    }

    #[test]
    fn test_empty_map_has_rows_times_cols_cells() {
        let buf = uniform_buffer(100, 100);
        let grid = Grid::build(&buf, &GridConfig { min_size: 10 }, false, [255, 255, 255], [0, 0, 0]).unwrap();
        assert_eq!(grid.len(), 100);
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 10);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let buf = uniform_buffer(100, 100);
        let grid = Grid::build(&buf, &GridConfig { min_size: 10 }, false, [255, 255, 255], [0, 0, 0]).unwrap();
        assert!(grid.get(100, 0).is_err());
        assert!(grid.get(0, 100).is_err());
        assert!(grid.get(-1, 0).is_err());
    }

    #[test]
    fn test_cardinal_neighbors_at_corner() {
        let buf = uniform_buffer(30, 30);
        let grid = Grid::build(&buf, &GridConfig { min_size: 10 }, false, [255, 255, 255], [0, 0, 0]).unwrap();
        let corner = grid.get(0, 0).unwrap();
        let neighbors = grid.neighbors(corner);
        // Top-left corner: only E and S are in-bounds.
        assert_eq!(neighbors.len(), 2);
    }

    #[test]
    fn test_diagonal_neighbors_enabled() {
        let buf = uniform_buffer(30, 30);
        let grid = Grid::build(&buf, &GridConfig { min_size: 10 }, true, [255, 255, 255], [0, 0, 0]).unwrap();
        let center = grid.get(15, 15).unwrap();
        assert_eq!(grid.neighbors(center).len(), 8);
    }

    #[test]
    fn test_blocked_cells_are_excluded() {
        let mut buf = uniform_buffer(30, 30);
        for y in 0..10 {
            for x in 10..20 {
                buf.set(x, y, [0, 0, 0]);
            }
        }
        let grid = Grid::build(&buf, &GridConfig { min_size: 10 }, false, [255, 255, 255], [0, 0, 0]).unwrap();
        let above = grid.get(15, 5).unwrap();
        assert_eq!(grid.cell(above).state(), State::Blocked);
        let below = grid.get(15, 15).unwrap();
        let neighbors = grid.neighbors(below);
        let above_present = neighbors.iter().any(|n| *n == above);
        assert!(!above_present);
    }
}
