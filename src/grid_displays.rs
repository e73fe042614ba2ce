use std::fmt;

use crate::maze::Maze;
use crate::units::DimensionSize;
use crate::walls::cell_index;

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const CORNER: &'static str = "+";
        const WALL_VERTICAL: &'static str = "|";
        const OPEN_VERTICAL: &'static str = " ";
        const WALL_HORIZONTAL: &'static str = "--";
        const OPEN_HORIZONTAL: &'static str = "  ";
        const CELL_BODY: &'static str = "  ";

        let dimension = self.dimension();
        let DimensionSize(dim) = dimension;
        let open_pairs = self.open_cell_pairs();
        let is_open = |cell_a: usize, cell_b: usize| open_pairs.contains(&(cell_a, cell_b));

        // The north most boundary is solid wall: the catalog holds no
        // boundary walls, so nothing along it can ever be open.
        let mut output = String::from(CORNER);
        for _ in 0..dim {
            output.push_str(WALL_HORIZONTAL);
            output.push_str(CORNER);
        }
        output.push_str("\n");

        for y in 0..dim {
            // Each cell uses the southern wall of the cell above as its own
            // northern wall, so a grid row renders as two lines: the cell
            // bodies with their eastern walls, then the southern walls with
            // their corner separators.
            let mut row_middle_section_render = String::from(WALL_VERTICAL);
            let mut row_bottom_section_render = String::from(CORNER);

            for x in 0..dim {
                let is_last_column = x == dim - 1;
                let is_last_row = y == dim - 1;

                row_middle_section_render.push_str(CELL_BODY);
                let east_open = !is_last_column &&
                                is_open(cell_index(x, y, dimension),
                                        cell_index(x + 1, y, dimension));
                if east_open {
                    row_middle_section_render.push_str(OPEN_VERTICAL);
                } else {
                    row_middle_section_render.push_str(WALL_VERTICAL);
                }

                let south_open = !is_last_row &&
                                 is_open(cell_index(x, y, dimension),
                                         cell_index(x, y + 1, dimension));
                if south_open {
                    row_bottom_section_render.push_str(OPEN_HORIZONTAL);
                } else {
                    row_bottom_section_render.push_str(WALL_HORIZONTAL);
                }
                row_bottom_section_render.push_str(CORNER);
            }

            output.push_str(row_middle_section_render.as_ref());
            output.push_str("\n");
            output.push_str(row_bottom_section_render.as_ref());
            output.push_str("\n");
        }

        write!(f, "{}", output)
    }
}
