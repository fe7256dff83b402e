use super::super::World;
use crate::config::SimConfig;

impl World {
    /// Age the whole population by one tick and bury everyone whose life
    /// duration ran out, before any movement happens this tick. A starving
    /// ant therefore never gets to feed or reproduce on its death tick.
    pub(in crate::world) fn step_aging_phase(&mut self, config: &SimConfig) {
        for ant in &mut self.ants {
            ant.life_duration = ant.life_duration.saturating_sub(1);
        }
        let marked: Vec<bool> = self.ants.iter().map(|a| a.life_duration == 0).collect();
        self.remove_marked(&marked, config);
    }
}
