use crate::grid::{wrap_offset, Cell, Grid};

/// Compute the next Game of Life generation.
///
/// Cells under structure (`solidity > 0`) are copied verbatim; everything
/// else follows the standard rule with toroidal neighbor counting, where
/// structure cells never count as live neighbors. Returns a fresh grid and
/// leaves the input untouched; callers swap the reference.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height(), 0);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = grid.cell(x, y);

            if cell.solidity > 0 {
                *next.cell_mut(x, y) = cell.clone();
                continue;
            }

            let neighbors = count_unstructured_neighbors(grid, x, y);
            let value = if cell.value == 1 {
                u8::from(neighbors == 2 || neighbors == 3)
            } else {
                u8::from(neighbors == 3)
            };
            *next.cell_mut(x, y) = Cell {
                value,
                solidity: 0,
                color: None,
            };
        }
    }
    next
}

/// Toroidal 8-neighborhood count restricted to cells without structure.
fn count_unstructured_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = wrap_offset(x, dx, grid.width());
            let ny = wrap_offset(y, dy, grid.height());
            let neighbor = grid.cell(nx, ny);
            if neighbor.value == 1 && neighbor.solidity == 0 {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorWheel;

    #[test]
    fn isolated_cell_dies() {
        let mut grid = Grid::new(3, 3, 0);
        grid.set_value(1, 1, 1);
        let next = next_generation(&grid);
        assert_eq!(next.live_cells(), 0);
    }

    #[test]
    fn block_is_a_still_life() {
        let mut grid = Grid::new(4, 4, 0);
        for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            grid.set_value(x, y, 1);
        }
        let next = next_generation(&grid);
        for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert_eq!(next.cell(x, y).value, 1);
        }
        assert_eq!(next.live_cells(), 4);
    }

    #[test]
    fn birth_counts_across_the_torus() {
        // Three live cells hugging the left edge; the wrapped column on the
        // right edge sees them as neighbors.
        let mut grid = Grid::new(5, 5, 0);
        grid.set_value(0, 1, 1);
        grid.set_value(0, 2, 1);
        grid.set_value(0, 3, 1);
        let next = next_generation(&grid);
        assert_eq!(next.cell(4, 2).value, 1, "birth behind the seam");
        assert_eq!(next.cell(1, 2).value, 1);
    }

    #[test]
    fn structure_is_immune_to_the_rule() {
        let mut wheel = ColorWheel::new();
        let color = wheel.next_color();
        let mut grid = Grid::new(3, 3, 0);
        // A lone structure cell would die as an ordinary live cell.
        grid.set(1, 1, 1, Some(color), 7);
        let next = next_generation(&grid);
        assert_eq!(next.cell(1, 1).value, 1);
        assert_eq!(next.cell(1, 1).solidity, 7);
        assert_eq!(next.cell(1, 1).color, Some(color));
    }

    #[test]
    fn structure_does_not_feed_neighbor_counts() {
        let mut wheel = ColorWheel::new();
        let mut grid = Grid::new(5, 5, 0);
        // Two plain live cells plus one structure cell next to (2,2): without
        // the structure exemption (2,2) would see three neighbors and be born.
        grid.set_value(1, 1, 1);
        grid.set_value(3, 1, 1);
        grid.set(2, 1, 1, Some(wheel.next_color()), 5);
        let next = next_generation(&grid);
        assert_eq!(next.cell(2, 2).value, 0);
    }

    #[test]
    fn input_grid_is_not_mutated() {
        let mut grid = Grid::new(3, 3, 0);
        grid.set_value(1, 1, 1);
        let snapshot = grid.clone();
        let _ = next_generation(&grid);
        assert_eq!(grid, snapshot);
    }
}
