//! Collision Grid
//!
//! Read-only occupancy grid built once from level data. Cell value `0` is
//! passable; any non-zero value is a wall, and the value doubles as the
//! wall's texture id for the renderer collaborator (opaque here).
//!
//! Bounds are a caller precondition: level design keeps the camera inside
//! the outer wall ring, so queries assert in debug builds instead of
//! checking defensively.

/// Immutable 2D occupancy grid.
#[derive(Clone, Debug)]
pub struct CollisionGrid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl CollisionGrid {
    /// Build from row-major level data.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or ragged; level data is authored, not
    /// user input.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        assert!(!rows.is_empty(), "level has no rows");
        let width = rows[0].len();
        assert!(width > 0, "level has empty rows");

        let mut cells = Vec::with_capacity(rows.len() * width);
        for row in rows {
            assert_eq!(row.len(), width, "level rows have unequal lengths");
            cells.extend_from_slice(row);
        }

        Self {
            cells,
            width,
            height: rows.len(),
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupancy code at a cell. Non-zero values select wall textures.
    #[inline]
    pub fn cell(&self, cell_x: i64, cell_y: i64) -> u8 {
        debug_assert!(
            cell_x >= 0
                && cell_y >= 0
                && (cell_x as usize) < self.width
                && (cell_y as usize) < self.height,
            "cell ({cell_x}, {cell_y}) outside {}x{} grid",
            self.width,
            self.height,
        );
        self.cells[cell_y as usize * self.width + cell_x as usize]
    }

    /// Whether a cell is occupied.
    #[inline]
    pub fn is_blocked(&self, cell_x: i64, cell_y: i64) -> bool {
        self.cell(cell_x, cell_y) != 0
    }

    /// Cell index of a continuous coordinate (truncation toward zero;
    /// coordinates are non-negative in the valid domain).
    #[inline]
    pub fn cell_of(coord: f64) -> i64 {
        coord as i64
    }

    /// The bundled 15x15 default level.
    pub fn default_level() -> Self {
        Self::from_rows(&[
            vec![1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2],
            vec![1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2],
            vec![1, 0, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 2],
            vec![1, 0, 3, 0, 0, 0, 3, 0, 2, 0, 0, 0, 0, 0, 2],
            vec![1, 0, 3, 0, 0, 0, 3, 0, 2, 2, 2, 0, 2, 2, 2],
            vec![1, 0, 3, 0, 0, 0, 3, 0, 2, 0, 0, 0, 0, 0, 2],
            vec![1, 0, 3, 3, 0, 3, 3, 0, 2, 0, 0, 0, 0, 0, 2],
            vec![1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2],
            vec![1, 1, 1, 1, 1, 1, 1, 1, 4, 4, 4, 0, 4, 4, 4],
            vec![1, 0, 0, 0, 0, 0, 1, 4, 0, 0, 0, 0, 0, 0, 4],
            vec![1, 0, 0, 0, 0, 0, 1, 4, 0, 0, 0, 0, 0, 0, 4],
            vec![1, 0, 0, 0, 0, 0, 1, 4, 0, 3, 3, 3, 3, 0, 4],
            vec![1, 0, 0, 0, 0, 0, 1, 4, 0, 3, 3, 3, 3, 0, 4],
            vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4],
            vec![1, 1, 1, 1, 1, 1, 1, 4, 4, 4, 4, 4, 4, 4, 4],
        ])
    }
}
