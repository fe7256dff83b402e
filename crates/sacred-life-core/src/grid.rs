use crate::color::ColorId;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One cell of the lattice.
///
/// `value` is the sole input to neighbor counting. A cell with positive
/// `solidity` is structure: it is exempt from life rules and carries the
/// owner color of the ant that deposited it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: u8,
    pub solidity: u32,
    pub color: Option<ColorId>,
}

/// Dense toroidal 2D lattice, row-major (`idx = y * width + x`).
///
/// Coordinate arithmetic wraps modulo the dimensions only where that is the
/// documented contract (agent movement, toroidal counting). Everywhere else
/// an out-of-bounds coordinate is a precondition violation and panics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Wrap `coord + delta` into `[0, extent)` on a toroidal axis.
pub(crate) fn wrap_offset(coord: usize, delta: isize, extent: usize) -> usize {
    (coord as isize + delta).rem_euclid(extent as isize) as usize
}

impl Grid {
    /// Create a grid with every cell at `default_value` and no structure.
    ///
    /// # Panics
    /// Panics on zero dimensions; the shell validates sizes via
    /// [`crate::config::SimConfig::validate`] before they reach the core.
    pub fn new(width: usize, height: usize, default_value: u8) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let cells = vec![
            Cell {
                value: default_value,
                solidity: 0,
                color: None,
            };
            width * height
        ];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        assert!(
            self.in_bounds(x, y),
            "coordinate ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.idx(x, y)]
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let idx = self.idx(x, y);
        &mut self.cells[idx]
    }

    /// Full cell update.
    pub fn set(&mut self, x: usize, y: usize, value: u8, color: Option<ColorId>, solidity: u32) {
        let cell = self.cell_mut(x, y);
        cell.value = value;
        cell.color = color;
        cell.solidity = solidity;
    }

    /// Partial update: value only, color and solidity unchanged.
    pub fn set_value(&mut self, x: usize, y: usize, value: u8) {
        self.cell_mut(x, y).value = value;
    }

    /// Flip the cell's life value and strip any structure from it.
    pub fn toggle(&mut self, x: usize, y: usize) {
        let cell = self.cell_mut(x, y);
        cell.value = if cell.value == 0 { 1 } else { 0 };
        cell.color = None;
        cell.solidity = 0;
    }

    /// Count live cells in the 8-neighborhood on a finite board: off-grid
    /// neighbors contribute 0. Retained for compatibility; the life rule
    /// itself counts toroidally.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        assert!(self.in_bounds(x, y), "neighbor count center out of bounds");
        let mut count = 0;
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= self.width as isize || ny >= self.height as isize {
                    continue;
                }
                count += self.cells[ny as usize * self.width + nx as usize].value;
            }
        }
        count
    }

    /// Count live cells in the 8-neighborhood with toroidal wraparound.
    pub fn count_live_neighbors_wrapping(&self, x: usize, y: usize) -> u8 {
        assert!(self.in_bounds(x, y), "neighbor count center out of bounds");
        let mut count = 0;
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = wrap_offset(x, dx, self.width);
                let ny = wrap_offset(y, dy, self.height);
                count += self.cells[ny * self.width + nx].value;
            }
        }
        count
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.value == 1).count()
    }

    /// Zero every cell's life value. Structure counters are untouched.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.value = 0;
        }
    }

    /// Seed each cell live with probability `density`, stripping structure.
    pub fn randomize(&mut self, rng: &mut impl Rng, density: f64) {
        for cell in &mut self.cells {
            cell.value = u8::from(rng.random_bool(density));
            cell.solidity = 0;
            cell.color = None;
        }
    }

    /// Build a resized grid preserving the overlapping top-left region.
    /// Ants left outside the new bounds are the caller's problem.
    pub fn resize(&self, new_width: usize, new_height: usize) -> Self {
        let mut next = Self::new(new_width, new_height, 0);
        for y in 0..self.height.min(new_height) {
            for x in 0..self.width.min(new_width) {
                *next.cell_mut(x, y) = self.cell(x, y).clone();
            }
        }
        next
    }
}
