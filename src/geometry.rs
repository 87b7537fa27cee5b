//! Hexagonal grid geometry.
//!
//! Pure math for a pointy-top hexagonal tiling in an odd-row-shifted offset
//! layout. Geometry is stateless beyond its configuration: regenerating it
//! from the same inputs always yields the same cells and the same
//! cell-to-pixel mapping.

use std::cmp::Ordering;

use thiserror::Error;

/// Errors from invalid grid configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Hex size or image extent cannot produce a usable grid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Discrete grid address of one hexagon, in offset coordinates.
///
/// Immutable value type; equality and hashing are by value. Ordering is
/// `(row, col)` lexicographic so tie-breaking and serialized cell lists are
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column index within the row.
    pub col: i32,
    /// Row index from the top of the image.
    pub row: i32,
}

impl Cell {
    /// Create a cell address.
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Hexagonal grid layout over an image extent.
///
/// Pointy-top hexagons; odd rows are shifted right by half a hex width.
/// `hex_size` is the circumradius in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexGeometry {
    hex_size: f64,
    image_width: u32,
    image_height: u32,
}

impl HexGeometry {
    /// Create a grid layout for an image of `width` x `height` pixels.
    ///
    /// Fails when `hex_size` is not a positive finite number. A zero-area
    /// image is not an error; it simply yields no cells.
    pub fn new(hex_size: f64, width: u32, height: u32) -> Result<Self, GeometryError> {
        if !hex_size.is_finite() || hex_size <= 0.0 {
            return Err(GeometryError::InvalidConfiguration(format!(
                "hex size must be positive, got {hex_size}"
            )));
        }
        Ok(Self {
            hex_size,
            image_width: width,
            image_height: height,
        })
    }

    /// Circumradius of one hexagon in pixels.
    pub fn hex_size(&self) -> f64 {
        self.hex_size
    }

    /// Image width in pixels.
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Image height in pixels.
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Full height of one hexagon (`2 * hex_size`).
    pub fn hex_height(&self) -> f64 {
        2.0 * self.hex_size
    }

    /// Full width of one hexagon (`sqrt(3) * hex_size`).
    pub fn hex_width(&self) -> f64 {
        3.0_f64.sqrt() * self.hex_size
    }

    /// Vertical distance between adjacent row centers (`0.75 * hex_height`).
    pub fn vertical_spacing(&self) -> f64 {
        0.75 * self.hex_height()
    }

    /// Pixel center of a cell.
    pub fn cell_center(&self, cell: Cell) -> (f64, f64) {
        let mut x = f64::from(cell.col) * self.hex_width();
        if cell.row.rem_euclid(2) == 1 {
            x += self.hex_width() / 2.0;
        }
        let y = f64::from(cell.row) * self.vertical_spacing();
        (x, y)
    }

    /// The six polygon vertices of a cell, at angles `60*i - 30` degrees
    /// from the center. Shared by rendering and exact hit-testing.
    pub fn vertices(&self, cell: Cell) -> [(f64, f64); 6] {
        let (cx, cy) = self.cell_center(cell);
        let mut points = [(0.0, 0.0); 6];
        for (i, point) in points.iter_mut().enumerate() {
            let angle = (60.0 * i as f64 - 30.0).to_radians();
            *point = (
                cx + self.hex_size * angle.cos(),
                cy + self.hex_size * angle.sin(),
            );
        }
        points
    }

    /// Largest `(row, col)` indices of the grid, or `None` for a zero-area
    /// image.
    ///
    /// One extra row and column of partial coverage is included past each
    /// boundary so the tiling fully covers `[0, width) x [0, height)`,
    /// including partially visible edge cells.
    pub fn grid_extent(&self) -> Option<(i32, i32)> {
        if self.image_width == 0 || self.image_height == 0 {
            return None;
        }
        let max_row = (f64::from(self.image_height) / self.vertical_spacing()).ceil() as i32;
        let max_col = (f64::from(self.image_width) / self.hex_width()).ceil() as i32;
        Some((max_row, max_col))
    }

    /// Whether the grid contains this cell address.
    pub fn contains(&self, cell: Cell) -> bool {
        match self.grid_extent() {
            Some((max_row, max_col)) => {
                (0..=max_row).contains(&cell.row) && (0..=max_col).contains(&cell.col)
            }
            None => false,
        }
    }

    /// Finite, restartable iterator over every cell covering the image,
    /// row-major from the top-left.
    pub fn cells(&self) -> Cells {
        Cells {
            extent: self.grid_extent(),
            row: 0,
            col: 0,
        }
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        match self.grid_extent() {
            Some((max_row, max_col)) => (max_row as usize + 1) * (max_col as usize + 1),
            None => 0,
        }
    }
}

/// Row-major iterator over the cells of a [`HexGeometry`].
#[derive(Debug, Clone)]
pub struct Cells {
    extent: Option<(i32, i32)>,
    row: i32,
    col: i32,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let (max_row, max_col) = self.extent?;
        if self.row > max_row {
            return None;
        }
        let cell = Cell::new(self.col, self.row);
        self.col += 1;
        if self.col > max_col {
            self.col = 0;
            self.row += 1;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some((max_row, max_col)) = self.extent else {
            return (0, Some(0));
        };
        let cols = max_col as usize + 1;
        let remaining = if self.row > max_row {
            0
        } else {
            (max_row - self.row) as usize * cols + (cols - self.col as usize)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}
