use crate::units::{DimensionSize, WallsCount};

/// Orientation of an interior wall. Vertical walls stand between two
/// horizontally adjacent cells, horizontal walls between two vertically
/// adjacent cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallOrientation {
    Vertical,
    Horizontal,
}

/// An interior wall between two grid adjacent cells.
///
/// The cell pair and orientation are fixed at construction. The only
/// mutation a wall ever sees is being opened, once, when the generator
/// carves it into a passage.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Wall {
    cell_a: usize,
    cell_b: usize,
    orientation: WallOrientation,
    open: bool,
}

impl Wall {
    /// A closed wall between two adjacent cells, lower cell index first.
    pub fn between(cell_a: usize, cell_b: usize, orientation: WallOrientation) -> Wall {
        debug_assert!(cell_a < cell_b);
        Wall {
            cell_a: cell_a,
            cell_b: cell_b,
            orientation: orientation,
            open: false,
        }
    }

    /// The two adjacent cells, lower cell index first.
    #[inline]
    pub fn cells(&self) -> (usize, usize) {
        (self.cell_a, self.cell_b)
    }

    #[inline]
    pub fn orientation(&self) -> WallOrientation {
        self.orientation
    }

    /// Has this wall been carved into a passage?
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Carve the wall into a passage. Walls never close again.
    pub fn open(&mut self) {
        self.open = true;
    }
}

/// One dimensional row major index of the cell at `(x, y)` in a square grid
/// of the given dimension.
#[inline]
pub fn cell_index(x: usize, y: usize, dimension: DimensionSize) -> usize {
    let DimensionSize(dim) = dimension;
    debug_assert!(x < dim && y < dim);
    y * dim + x
}

/// Grid position `(x, y)` of a one dimensional row major cell index.
#[inline]
pub fn cell_coordinate(index: usize, dimension: DimensionSize) -> (usize, usize) {
    let DimensionSize(dim) = dimension;
    let y = index / dim;
    let x = index - (y * dim);
    (x, y)
}

/// Number of interior walls in a square grid: `2 * size * (size - 1)`.
pub fn interior_walls_count(dimension: DimensionSize) -> WallsCount {
    let DimensionSize(dim) = dimension;
    WallsCount(2 * dim * dim.saturating_sub(1))
}

/// Build the complete interior wall catalog for a square grid.
///
/// Walks the grid a row at a time, emitting the row's vertical walls west to
/// east and then the horizontal walls joining it to the row below, so every
/// pair of grid adjacent cells appears exactly once. The outer boundary of
/// the grid has no walls in the catalog.
pub fn build_walls(dimension: DimensionSize) -> Vec<Wall> {
    let DimensionSize(dim) = dimension;
    let WallsCount(capacity) = interior_walls_count(dimension);
    let mut walls = Vec::with_capacity(capacity);

    for y in 0..dim {
        for x in 1..dim {
            walls.push(Wall::between(cell_index(x - 1, y, dimension),
                                     cell_index(x, y, dimension),
                                     WallOrientation::Vertical));
        }
        if y + 1 < dim {
            for x in 0..dim {
                walls.push(Wall::between(cell_index(x, y, dimension),
                                         cell_index(x, y + 1, dimension),
                                         WallOrientation::Horizontal));
            }
        }
    }

    walls
}
