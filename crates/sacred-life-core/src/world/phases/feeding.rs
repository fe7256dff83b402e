use super::super::World;
use crate::ant::{Ant, Direction};
use crate::config::SimConfig;
use crate::constants::TWIN_BIRTH_CHANCE;
use crate::grid::wrap_offset;
use rand::seq::SliceRandom;
use rand::Rng;

/// Snapshot of one ant's cell immediately before the stepper ran, keyed by
/// ant id because the population can shrink and grow before it is consumed.
pub(in crate::world) struct CellObservation {
    pub id: String,
    pub x: usize,
    pub y: usize,
    pub value: u8,
}

impl World {
    pub(in crate::world) fn observe_pre_step_cells(&self) -> Vec<CellObservation> {
        self.ants
            .iter()
            .filter(|a| self.grid.in_bounds(a.x, a.y))
            .map(|a| CellObservation {
                id: a.id.clone(),
                x: a.x,
                y: a.y,
                value: self.grid.cell(a.x, a.y).value,
            })
            .collect()
    }

    /// Feed every surviving ant whose pre-step cell flipped from live to
    /// dead: one fullness point per ant per tick, no more. An ant that
    /// reaches the fullness threshold reproduces on the spot.
    pub(in crate::world) fn step_feeding_phase(
        &mut self,
        observations: &[CellObservation],
        config: &SimConfig,
    ) {
        for obs in observations {
            if obs.value != 1 {
                continue;
            }
            let Some(idx) = self.ants.iter().position(|a| a.id == obs.id) else {
                continue;
            };
            if self.grid.cell(obs.x, obs.y).value != 0 {
                continue;
            }
            self.ants[idx].fullness += 1;
            if self.ants[idx].fullness >= config.max_fullness {
                self.reproduce(idx, config);
            }
        }
    }

    /// Spawn offspring around the parent and consume the parent.
    ///
    /// RNG consumption order is fixed: neighbor shuffle, twin flip, then per
    /// offspring a direction pick and, only for a single child, the mutation
    /// flip. Twins always inherit the parent's color.
    fn reproduce(&mut self, parent_idx: usize, config: &SimConfig) {
        let (px, py, parent_color) = {
            let parent = &self.ants[parent_idx];
            (parent.x, parent.y, parent.color)
        };

        let mut positions: Vec<(usize, usize)> = Vec::with_capacity(8);
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                positions.push((
                    wrap_offset(px, dx, self.grid.width()),
                    wrap_offset(py, dy, self.grid.height()),
                ));
            }
        }
        positions.shuffle(&mut self.rng);

        let count = if self.rng.random_bool(TWIN_BIRTH_CHANCE) {
            2
        } else {
            1
        };
        let count = count.min(positions.len());
        let single = count == 1;
        for &(x, y) in positions.iter().take(count) {
            let dir = Direction::ALL[self.rng.random_range(0..4)];
            let mutated = single && self.rng.random_bool(config.mutation_rate);
            let color = if mutated {
                self.color_wheel.next_color()
            } else {
                parent_color
            };
            let id = self.next_ant_id();
            self.ants
                .push(Ant::new(id, x, y, dir, color, config.max_life_duration));
        }

        let mut parent = self.ants.remove(parent_idx);
        Self::release_owned_structure(&mut self.grid, &mut parent, &self.ants, config);
    }

    /// Record ownership for every surviving ant whose pre-step cell flipped
    /// from dead to live and still carries colored structure now. Cells the
    /// conflict passes already stripped never enter the cache.
    pub(in crate::world) fn step_ownership_phase(&mut self, observations: &[CellObservation]) {
        for obs in observations {
            if obs.value != 0 {
                continue;
            }
            let Some(idx) = self.ants.iter().position(|a| a.id == obs.id) else {
                continue;
            };
            let cell = self.grid.cell(obs.x, obs.y);
            if cell.value == 1 && cell.solidity > 0 && cell.color.is_some() {
                self.ants[idx].owned_cells.insert((obs.x, obs.y));
            }
        }
    }
}
