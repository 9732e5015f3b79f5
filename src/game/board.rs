//! The static hexagonal board.

/// Index of a cell on the board.
pub type CellIndex = usize;

/// Number of direction slots around a hexagonal cell.
pub const DIRECTIONS: usize = 6;

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Position of this cell on the board.
    pub index: CellIndex,
    /// Soil richness; higher is worth more when a tree here completes.
    pub richness: u32,
    /// Adjacent cell per direction, `None` where the board ends.
    pub neighbours: [Option<CellIndex>; DIRECTIONS],
}

impl Cell {
    /// Create a cell with no neighbours.
    #[must_use]
    pub const fn new(index: CellIndex, richness: u32) -> Self {
        Self {
            index,
            richness,
            neighbours: [None; DIRECTIONS],
        }
    }

    /// Set the neighbour slots.
    #[must_use]
    pub const fn with_neighbours(mut self, neighbours: [Option<CellIndex>; DIRECTIONS]) -> Self {
        self.neighbours = neighbours;
        self
    }

    /// Adjacent cells in direction order, skipping board edges.
    pub fn adjacent(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.neighbours.iter().filter_map(|n| *n)
    }
}

/// The board: every cell, stored at the position of its index.
///
/// Built once at startup and read-only for the rest of the game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board from cells listed in index order.
    ///
    /// Returns `None` if any cell's index does not match its position.
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>) -> Option<Self> {
        cells
            .iter()
            .enumerate()
            .all(|(i, cell)| cell.index == i)
            .then_some(Self { cells })
    }

    /// Build a board from cells the caller has already checked are in index order.
    pub(crate) fn from_ordered_cells(cells: Vec<Cell>) -> Self {
        debug_assert!(cells.iter().enumerate().all(|(i, cell)| cell.index == i));
        Self { cells }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Look up a cell.
    #[must_use]
    #[inline]
    pub fn get(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Whether `index` names a cell on this board.
    #[must_use]
    #[inline]
    pub fn contains(&self, index: CellIndex) -> bool {
        index < self.cells.len()
    }

    /// Richness of a cell, `None` for an index off the board.
    #[must_use]
    #[inline]
    pub fn richness(&self, index: CellIndex) -> Option<u32> {
        self.get(index).map(|cell| cell.richness)
    }

    /// Iterate over all cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_requires_index_order() {
        let ok = Board::from_cells(vec![Cell::new(0, 1), Cell::new(1, 3)]);
        assert!(ok.is_some());

        let swapped = Board::from_cells(vec![Cell::new(1, 3), Cell::new(0, 1)]);
        assert!(swapped.is_none());
    }

    #[test]
    fn test_richness_lookup() {
        let board = Board::from_cells(vec![Cell::new(0, 1), Cell::new(1, 3)]).unwrap();
        assert_eq!(board.richness(0), Some(1));
        assert_eq!(board.richness(1), Some(3));
        assert_eq!(board.richness(2), None);
        assert!(board.contains(1));
        assert!(!board.contains(2));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_adjacent_skips_edges() {
        let cell = Cell::new(0, 3).with_neighbours([Some(1), None, Some(2), None, None, Some(6)]);
        let adjacent: Vec<_> = cell.adjacent().collect();
        assert_eq!(adjacent, vec![1, 2, 6]);
    }

    #[test]
    fn test_empty_board() {
        let board = Board::default();
        assert!(board.is_empty());
        assert_eq!(board.cells().count(), 0);
    }
}
