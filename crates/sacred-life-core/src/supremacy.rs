use crate::ant::Ant;
use crate::color::ColorId;
use crate::grid::Grid;
use std::collections::HashSet;

/// Erase structure whose owning lineage is extinct.
///
/// Computes the set of colors held by at least one living ant and strips
/// solidity and color from every cell outside that set. Run after any phase
/// that can change the living-ant set when the color-supremacy policy is on.
pub fn sweep_extinct_colors(grid: &mut Grid, ants: &[Ant]) {
    let living: HashSet<ColorId> = ants.iter().map(|a| a.color).collect();
    for cell in grid.cells_mut() {
        if let Some(color) = cell.color {
            if !living.contains(&color) {
                cell.solidity = 0;
                cell.color = None;
            }
        }
    }
}
