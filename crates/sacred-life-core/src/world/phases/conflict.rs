use super::super::World;
use crate::config::SimConfig;
use rand::Rng;
use std::cmp::Ordering;

impl World {
    /// Resolve territorial conflicts: for every unordered pair of
    /// distinct-color ants within Chebyshev distance 1, the less-full ant is
    /// eliminated; equal fullness falls to a seeded coin flip.
    ///
    /// Eliminations are collected before any removal is applied, so the whole
    /// pass sees pre-pass fullness values. A pair whose two members are both
    /// already condemned is skipped; a condemned ant can still win a fight
    /// against a third party.
    pub(in crate::world) fn step_conflict_phase(&mut self, config: &SimConfig) {
        if self.ants.len() < 2 {
            return;
        }
        let mut marked = vec![false; self.ants.len()];
        for i in 0..self.ants.len() {
            for j in (i + 1)..self.ants.len() {
                if marked[i] && marked[j] {
                    continue;
                }
                let (a, b) = (&self.ants[i], &self.ants[j]);
                if a.color == b.color {
                    continue;
                }
                if a.x.abs_diff(b.x) > 1 || a.y.abs_diff(b.y) > 1 {
                    continue;
                }
                let loser = match a.fullness.cmp(&b.fullness) {
                    Ordering::Less => i,
                    Ordering::Greater => j,
                    Ordering::Equal => {
                        if self.rng.random_bool(0.5) {
                            i
                        } else {
                            j
                        }
                    }
                };
                marked[loser] = true;
            }
        }
        self.remove_marked(&marked, config);
    }
}
