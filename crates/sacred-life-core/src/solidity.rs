use crate::grid::{Cell, Grid};

/// Tick down every structure counter by one, floored at zero.
///
/// A cell keeps its owner color exactly while its post-decrement solidity is
/// still positive; the tick solidity reaches zero the color goes with it.
/// Returns a fresh grid snapshot.
pub fn decay(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height(), 0);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = grid.cell(x, y);
            *next.cell_mut(x, y) = Cell {
                value: cell.value,
                solidity: cell.solidity.saturating_sub(1),
                color: if cell.solidity > 1 { cell.color } else { None },
            };
        }
    }
    next
}

/// Resolve cells whose structure has just run out, in place.
///
/// With the life rule enabled the cell sheds its color and rejoins ordinary
/// life accounting as a plain live/dead cell. With the life rule disabled the
/// cell is forced dead but keeps its color as a fade residual for the
/// renderer; the core never reinterprets that residual.
pub fn resolve_zero_solidity(grid: &mut Grid, gol_enabled: bool) {
    for cell in grid.cells_mut() {
        if cell.color.is_some() && cell.solidity == 0 {
            if gol_enabled {
                cell.color = None;
            } else {
                cell.value = 0;
            }
        }
    }
}
