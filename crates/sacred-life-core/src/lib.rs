//! Simulation core for the Sacred Life cellular world.
//!
//! A toroidal grid evolves under Game of Life rules augmented with a
//! structure overlay, while ants follow a Langton turning rule, deposit or
//! erase structure, and live out an artificial-life lifecycle of feeding,
//! aging, reproduction, and territorial conflict. The [`world::World`]
//! orchestrator sequences everything into a deterministic two-phase tick;
//! rendering, input, and pacing live outside this crate.

pub mod ant;
pub mod color;
pub mod config;
pub mod constants;
pub mod grid;
pub mod life;
pub mod rng;
pub mod solidity;
pub mod stepper;
pub mod supremacy;
pub mod world;

pub use ant::{Ant, Direction};
pub use color::{ColorId, ColorWheel};
pub use config::{SimConfig, SimConfigError};
pub use grid::{Cell, Grid};
pub use world::{TickPhase, World};
