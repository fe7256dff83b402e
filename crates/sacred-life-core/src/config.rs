use serde::{Deserialize, Serialize};

/// Full configuration for one simulation run.
///
/// The core holds no hidden configuration state: every phase call receives
/// this record explicitly, and the shell is expected to validate it before
/// handing it over.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Deterministic seed for reproducible simulation runs.
    pub seed: u64,
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Apply Game of Life rules during the grid phase.
    pub gol_enabled: bool,
    /// Ants deposit colored structure when turning a cell on.
    pub structures_enabled: bool,
    /// Aging, feeding, reproduction, and conflict. Only effective together
    /// with `structures_enabled`.
    pub lifecycle_enabled: bool,
    /// Erase structure whose owning color has no living ant.
    pub color_supremacy_enabled: bool,
    /// Solidity assigned to a freshly deposited structure cell.
    pub structure_lifetime: u32,
    /// Fullness threshold at which an ant reproduces.
    pub max_fullness: u32,
    /// Life duration assigned to a newly created ant, in ticks.
    pub max_life_duration: u32,
    /// Probability that a single offspring receives a fresh color instead of
    /// its parent's. Twins never mutate.
    pub mutation_rate: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: 50,
            height: 50,
            gol_enabled: true,
            structures_enabled: false,
            lifecycle_enabled: false,
            color_supremacy_enabled: false,
            structure_lifetime: 25,
            max_fullness: 50,
            max_life_duration: 100,
            mutation_rate: 0.05,
        }
    }
}

macro_rules! define_sim_config_error {
    (
        $(
            $variant:ident $( { $($field:ident : $type:ty),* } )? => $fmt:literal $(, $arg:expr)*
        );* $(;)?
    ) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum SimConfigError {
            $(
                $variant $( { $($field : $type),* } )?,
            )*
        }

        impl std::fmt::Display for SimConfigError {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variant $( { $($field),* } )? => write!(f, $fmt $(, $arg)*),
                    )*
                }
            }
        }
    };
}

define_sim_config_error! {
    InvalidWidth => "width must be greater than 0";
    InvalidHeight => "height must be greater than 0";
    GridTooLarge { max: usize, actual: usize } => "grid dimension ({actual}) exceeds supported maximum ({max})";
    InvalidStructureLifetime => "structure_lifetime must be greater than 0";
    InvalidMaxFullness => "max_fullness must be greater than 0";
    InvalidMaxLifeDuration => "max_life_duration must be greater than 0";
    InvalidMutationRate => "mutation_rate must be finite and within [0,1]";
}

impl std::error::Error for SimConfigError {}

impl SimConfig {
    pub const MAX_GRID_DIM: usize = crate::constants::MAX_GRID_DIM;

    pub fn validate(&self) -> Result<(), SimConfigError> {
        self.validate_grid()?;
        self.validate_structures()?;
        self.validate_lifecycle()?;
        Ok(())
    }

    fn validate_grid(&self) -> Result<(), SimConfigError> {
        if self.width == 0 {
            return Err(SimConfigError::InvalidWidth);
        }
        if self.height == 0 {
            return Err(SimConfigError::InvalidHeight);
        }
        let largest = self.width.max(self.height);
        if largest > Self::MAX_GRID_DIM {
            return Err(SimConfigError::GridTooLarge {
                max: Self::MAX_GRID_DIM,
                actual: largest,
            });
        }
        Ok(())
    }

    fn validate_structures(&self) -> Result<(), SimConfigError> {
        if self.structure_lifetime == 0 {
            return Err(SimConfigError::InvalidStructureLifetime);
        }
        Ok(())
    }

    fn validate_lifecycle(&self) -> Result<(), SimConfigError> {
        if self.max_fullness == 0 {
            return Err(SimConfigError::InvalidMaxFullness);
        }
        if self.max_life_duration == 0 {
            return Err(SimConfigError::InvalidMaxLifeDuration);
        }
        if !(self.mutation_rate.is_finite() && (0.0..=1.0).contains(&self.mutation_rate)) {
            return Err(SimConfigError::InvalidMutationRate);
        }
        Ok(())
    }
}
