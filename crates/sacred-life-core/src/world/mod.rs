mod phases;
#[cfg(test)]
mod tests;

use crate::ant::{Ant, Direction};
use crate::color::ColorWheel;
use crate::config::{SimConfig, SimConfigError};
use crate::grid::Grid;
use crate::{life, rng, solidity, stepper, supremacy};
use rand::Rng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};

/// Which half of the tick runs next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickPhase {
    Grid,
    Agents,
}

/// Tick orchestrator: owns the grid, the ant population, the generation
/// counter, and the single RNG stream between ticks.
///
/// A tick is two half-phases (grid update, then agent update), each atomic
/// with respect to observers. Phases mutate `self` but read all configuration
/// from the record passed in; the world keeps no hidden configuration state.
pub struct World {
    pub grid: Grid,
    pub ants: Vec<Ant>,
    rng: ChaCha12Rng,
    color_wheel: ColorWheel,
    generation: u64,
    phase: TickPhase,
    ant_counter: u64,
}

impl World {
    pub fn new(config: &SimConfig) -> Result<Self, SimConfigError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.width, config.height, 0),
            ants: Vec::new(),
            rng: rng::create_rng(config.seed),
            color_wheel: ColorWheel::new(),
            generation: 0,
            phase: TickPhase::Grid,
            ant_counter: 0,
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> TickPhase {
        self.phase
    }

    /// Run whichever half-phase the cursor points at, then advance it. This
    /// is the entry point for externally paced stepping: the timer decides
    /// when a phase runs, never how.
    pub fn step_phase(&mut self, config: &SimConfig) {
        match self.phase {
            TickPhase::Grid => self.tick_phase_grid(config),
            TickPhase::Agents => self.tick_phase_agents(config),
        }
    }

    /// Run one full generation (both half-phases).
    pub fn tick(&mut self, config: &SimConfig) {
        self.step_phase(config);
        self.step_phase(config);
    }

    /// Grid half-phase: solidity decay, then optionally the life rule, the
    /// zero-solidity resolution, and the color-supremacy sweep.
    pub fn tick_phase_grid(&mut self, config: &SimConfig) {
        self.grid = solidity::decay(&self.grid);
        if config.gol_enabled {
            self.grid = life::next_generation(&self.grid);
        }
        if config.structures_enabled {
            solidity::resolve_zero_solidity(&mut self.grid, config.gol_enabled);
        }
        if config.color_supremacy_enabled {
            supremacy::sweep_extinct_colors(&mut self.grid, &self.ants);
        }
        self.phase = TickPhase::Agents;
    }

    /// Agent half-phase. With the lifecycle active (lifecycle and structure
    /// flags both on) the order is load-bearing: aging, conflict pass one,
    /// movement, feeding and reproduction, conflict pass two, ownership
    /// tracking. Without it the population just steps.
    pub fn tick_phase_agents(&mut self, config: &SimConfig) {
        if !self.ants.is_empty() {
            let lifecycle_active = config.lifecycle_enabled && config.structures_enabled;
            if lifecycle_active {
                self.step_aging_phase(config);
                self.step_conflict_phase(config);
            }
            let observations = if lifecycle_active {
                self.observe_pre_step_cells()
            } else {
                Vec::new()
            };
            stepper::step_all(
                &mut self.grid,
                &mut self.ants,
                config.structures_enabled,
                config.structure_lifetime,
            );
            if lifecycle_active {
                self.step_feeding_phase(&observations, config);
                self.step_conflict_phase(config);
                self.step_ownership_phase(&observations);
            }
        }
        if config.color_supremacy_enabled {
            supremacy::sweep_extinct_colors(&mut self.grid, &self.ants);
        }
        self.generation += 1;
        self.phase = TickPhase::Grid;
    }

    /// Place a new ant with a fresh color from the wheel.
    ///
    /// # Panics
    /// Panics if the position is out of bounds; spawn coordinates are the
    /// caller's precondition.
    pub fn add_ant(&mut self, x: usize, y: usize, dir: Direction, config: &SimConfig) -> &Ant {
        assert!(
            self.grid.in_bounds(x, y),
            "ant spawn position ({x}, {y}) out of bounds"
        );
        let id = self.next_ant_id();
        let color = self.color_wheel.next_color();
        self.ants
            .push(Ant::new(id, x, y, dir, color, config.max_life_duration));
        self.ants.last().expect("just pushed")
    }

    /// Place a new ant at a uniformly random position and facing.
    pub fn add_random_ant(&mut self, config: &SimConfig) -> &Ant {
        let x = self.rng.random_range(0..self.grid.width());
        let y = self.rng.random_range(0..self.grid.height());
        let dir = Direction::ALL[self.rng.random_range(0..4)];
        self.add_ant(x, y, dir, config)
    }

    /// Seed the grid randomly; structure is stripped in the process.
    pub fn randomize(&mut self, density: f64) {
        self.grid.randomize(&mut self.rng, density);
    }

    /// Remove every ant and zero every life value; the generation counter
    /// restarts.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.ants.clear();
        self.generation = 0;
        self.phase = TickPhase::Grid;
    }

    /// Resize the grid preserving the overlapping top-left region; ants left
    /// outside the new bounds are dropped.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        self.grid = self.grid.resize(new_width, new_height);
        self.ants.retain(|a| a.x < new_width && a.y < new_height);
    }

    fn next_ant_id(&mut self) -> String {
        let id = format!("ant-{}", self.ant_counter);
        self.ant_counter += 1;
        id
    }

    /// Drop the ants flagged in `marked`, releasing each one's structure
    /// against the survivor set. Because every same-pass death is already out
    /// of the survivor set, simultaneous same-color deaths release
    /// idempotently regardless of processing order.
    pub(in crate::world) fn remove_marked(&mut self, marked: &[bool], config: &SimConfig) {
        debug_assert_eq!(marked.len(), self.ants.len());
        if !marked.contains(&true) {
            return;
        }
        let mut survivors = Vec::with_capacity(self.ants.len());
        let mut dead = Vec::new();
        for (ant, &is_dead) in self.ants.drain(..).zip(marked) {
            if is_dead {
                dead.push(ant);
            } else {
                survivors.push(ant);
            }
        }
        self.ants = survivors;
        for mut ant in dead {
            Self::release_owned_structure(&mut self.grid, &mut ant, &self.ants, config);
        }
    }

    /// Give a dead (or reproducing) ant's structure back to the world.
    ///
    /// Under the color-supremacy policy a surviving same-color sibling keeps
    /// collective claim on the structure, so only the local cache is dropped.
    /// Otherwise the full-grid color scan is authoritative and the cached
    /// coordinates are cleared afterwards as a stale-entry fallback.
    pub(in crate::world) fn release_owned_structure(
        grid: &mut Grid,
        ant: &mut Ant,
        survivors: &[Ant],
        config: &SimConfig,
    ) {
        if !config.structures_enabled {
            return;
        }
        if config.color_supremacy_enabled && survivors.iter().any(|s| s.color == ant.color) {
            ant.owned_cells.clear();
            return;
        }
        for cell in grid.cells_mut() {
            if cell.color == Some(ant.color) {
                cell.solidity = 0;
                cell.color = None;
            }
        }
        for &(x, y) in &ant.owned_cells {
            if grid.in_bounds(x, y) {
                let cell = grid.cell_mut(x, y);
                cell.solidity = 0;
                cell.color = None;
            }
        }
        ant.owned_cells.clear();
    }
}
