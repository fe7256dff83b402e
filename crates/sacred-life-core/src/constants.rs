/// Maximum supported grid dimension on either axis.
pub const MAX_GRID_DIM: usize = 1024;

/// Hue advance per generated color, in degrees. A prime-ish step spreads
/// consecutive hues around the wheel without collision checks.
pub const HUE_STEP_DEGREES: u16 = 47;

/// Probability that a reproduction event yields two offspring instead of one.
pub const TWIN_BIRTH_CHANCE: f64 = 0.6;
