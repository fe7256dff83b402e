use crate::ant::Ant;
use crate::grid::{wrap_offset, Grid};

/// Advance every ant one cell, in array order.
///
/// Per ant: read its cell, turn (live cell → right, dead cell → left), flip
/// the cell's value, then move one cell forward with toroidal wraparound.
/// When the flip turns the cell on and structures are enabled, the cell
/// receives the ant's color and `structure_lifetime` solidity; otherwise any
/// structure on it is cleared. The flipped cell is always the pre-move cell.
///
/// An out-of-bounds ant is skipped without side effects; that state cannot
/// arise under correct use but must not corrupt the grid.
pub fn step_all(
    grid: &mut Grid,
    ants: &mut [Ant],
    structures_enabled: bool,
    structure_lifetime: u32,
) {
    for ant in ants.iter_mut() {
        if !grid.in_bounds(ant.x, ant.y) {
            continue;
        }

        let value = grid.cell(ant.x, ant.y).value;
        ant.dir = if value == 1 {
            ant.dir.turn_right()
        } else {
            ant.dir.turn_left()
        };

        let new_value = if value == 1 { 0 } else { 1 };
        if structures_enabled && new_value == 1 {
            grid.set(ant.x, ant.y, 1, Some(ant.color), structure_lifetime);
        } else {
            grid.set(ant.x, ant.y, new_value, None, 0);
        }

        let (dx, dy) = ant.dir.offset();
        ant.x = wrap_offset(ant.x, dx, grid.width());
        ant.y = wrap_offset(ant.y, dy, grid.height());
    }
}
