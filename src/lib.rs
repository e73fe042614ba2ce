//! **perfect_mazes** is a maze generation library: randomised Kruskal
//! carving over a disjoint-set of square grid cells, with a text renderer.

pub mod disjoint_set;
pub mod generators;
pub mod grid_displays;
pub mod maze;
pub mod units;
pub mod walls;
