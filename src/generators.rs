use rand::{Rng, XorShiftRng};

use crate::disjoint_set::DisjointSet;
use crate::maze::Maze;
use crate::units::DimensionSize;
use crate::walls;

/// Uniform source of wall choices for the generator.
///
/// The generator wants one uniformly random wall per loop iteration. The
/// source is passed in by the caller rather than pulled from a global, so a
/// fixed seed replays the exact same carving sequence.
pub trait WallSelector {
    /// Choose one wall from a pool of `pool_len` remaining walls, returning
    /// an index in `[0, pool_len)`. `pool_len` is never zero.
    fn select_wall(&mut self, pool_len: usize) -> usize;
}

impl WallSelector for XorShiftRng {
    fn select_wall(&mut self, pool_len: usize) -> usize {
        self.gen_range(0, pool_len)
    }
}

/// Apply the randomised Kruskal maze generation algorithm to a square grid
/// of the given dimension.
///
/// Every cell starts in its own set and every interior wall starts closed.
/// Walls are drawn one at a time, uniformly at random, from the pool of
/// walls not yet considered. A wall whose two cells are already mutually
/// reachable is discarded; any other wall is carved open and its two cell
/// sets merged. After `size * size - 1` merges every cell can reach every
/// other and the open walls form a spanning tree of the grid: a perfect
/// maze, with exactly one path between any two cells. Walls still in the
/// pool at that point simply stay closed.
pub fn randomised_kruskal<Selector>(dimension: DimensionSize,
                                    selector: &mut Selector)
                                    -> Maze
    where Selector: WallSelector
{
    let DimensionSize(dim) = dimension;
    let cells_count = dim * dim;

    let mut cell_sets = DisjointSet::new(cells_count);
    let mut maze_walls = walls::build_walls(dimension);

    // Pool of indices into maze_walls still to be considered. Drawing with
    // swap_remove keeps every draw O(1) without biasing the choice over the
    // remaining walls.
    let mut unseen_walls: Vec<usize> = (0..maze_walls.len()).collect();
    let mut components_remaining = cells_count;

    while components_remaining > 1 {
        let pool_index = selector.select_wall(unseen_walls.len());
        let wall_index = unseen_walls.swap_remove(pool_index);

        let (cell_a, cell_b) = maze_walls[wall_index].cells();
        if !cell_sets.is_connected(cell_a, cell_b) {
            maze_walls[wall_index].open();
            cell_sets.union(cell_a, cell_b);
            components_remaining -= 1;
        }
    }

    Maze::new(dimension, maze_walls)
}
