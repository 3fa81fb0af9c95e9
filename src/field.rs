use alloc::vec::Vec;

/// Cell value of the starting point.
pub const START: u32 = 0;
/// Cell value of the end point.
pub const END: u32 = 1;
/// Initial value of every other cell.
pub const UNVISITED: u32 = 2;

/// The grid produced by a walk, stored row-major.
///
/// Cells hold [START], [END], or `UNVISITED + n` where `n` is the number of
/// times the walk moved away from that cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    cells: Vec<u32>,
    width: usize,
    height: usize,
    end: usize,
}

impl Field {
    pub(crate) fn from_parts(cells: Vec<u32>, width: usize, height: usize, end: usize) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { cells, width, height, end }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a valid field has an odd number of cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Linear index of the center cell, where every walk begins.
    #[inline]
    pub fn start(&self) -> usize {
        self.cells.len() / 2
    }

    /// Linear index of the cell the walk finished on.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Converts a linear index to `(row, col)`.
    #[inline]
    pub const fn position(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// All cells, row after row.
    #[inline]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[u32]> {
        self.rows().nth(row)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Consumes the field and returns its cells grouped by rows of `N` cells.
    /// When `N` does not divide the field size, the last row is padded with
    /// `None`.
    pub fn into_rows<const N: usize>(self) -> impl Iterator<Item = [Option<u32>; N]> {
        crate::grouper::grouper::<_, N>(self.cells)
    }
}
