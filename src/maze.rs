use std::collections::HashSet;
use std::hash::BuildHasherDefault;

use fnv::FnvHasher;

use crate::units::{CellsCount, DimensionSize, WallsCount};
use crate::walls::Wall;

/// Hash set keyed by the FNV hashing algorithm, which is much faster than
/// the default on short keys such as small integer pairs.
pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;

/// The finished product of a generation run: the grid dimension plus the
/// final open/closed state of every interior wall. Nothing mutates a maze
/// once it has been produced.
#[derive(Debug, Clone)]
pub struct Maze {
    dimension: DimensionSize,
    walls: Vec<Wall>,
}

impl Maze {
    pub fn new(dimension: DimensionSize, walls: Vec<Wall>) -> Maze {
        Maze {
            dimension: dimension,
            walls: walls,
        }
    }

    #[inline]
    pub fn dimension(&self) -> DimensionSize {
        self.dimension
    }

    #[inline]
    pub fn cells_count(&self) -> CellsCount {
        let DimensionSize(dim) = self.dimension;
        CellsCount(dim * dim)
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn open_walls_count(&self) -> WallsCount {
        WallsCount(self.walls.iter().filter(|wall| wall.is_open()).count())
    }

    /// The unordered cell pairs joined by an open wall, lower cell first.
    pub fn open_cell_pairs(&self) -> FnvHashSet<(usize, usize)> {
        let fnv = BuildHasherDefault::<FnvHasher>::default();
        let mut pairs = HashSet::with_capacity_and_hasher(self.walls.len(), fnv);
        for wall in self.walls.iter().filter(|wall| wall.is_open()) {
            pairs.insert(wall.cells());
        }
        pairs
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::walls::build_walls;

    #[test]
    fn counts_on_a_hand_carved_maze() {
        let mut walls = build_walls(DimensionSize(2));
        walls[0].open();
        walls[3].open();
        let maze = Maze::new(DimensionSize(2), walls);

        assert_eq!(maze.dimension(), DimensionSize(2));
        assert_eq!(maze.cells_count(), CellsCount(4));
        assert_eq!(maze.walls().len(), 4);
        assert_eq!(maze.open_walls_count(), WallsCount(2));
    }

    #[test]
    fn open_cell_pairs_reports_only_open_walls() {
        let mut walls = build_walls(DimensionSize(2));
        walls[1].open();
        let maze = Maze::new(DimensionSize(2), walls);

        let pairs = maze.open_cell_pairs();
        assert_eq!(pairs.len(), 1);
        assert!(pairs.contains(&(0, 2)));
        assert!(!pairs.contains(&(0, 1)));
    }

    #[test]
    fn empty_maze_has_no_open_pairs() {
        let maze = Maze::new(DimensionSize(1), build_walls(DimensionSize(1)));
        assert_eq!(maze.cells_count(), CellsCount(1));
        assert_eq!(maze.open_walls_count(), WallsCount(0));
        assert!(maze.open_cell_pairs().is_empty());
    }
}
