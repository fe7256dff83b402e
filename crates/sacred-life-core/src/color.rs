use serde::{Deserialize, Serialize};

/// Opaque color identity carried by structure cells and ants.
///
/// Inside the core a color is only ever compared for equality; the hue degree
/// is exposed solely so a rendering collaborator can encode it however it
/// likes (the core never parses colors back).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorId(u16);

impl ColorId {
    /// Hue degree in `[0, 360)` for renderers.
    pub fn hue(self) -> u16 {
        self.0
    }
}

/// Generator of visually distinct color identities.
///
/// A monotonically advancing hue cursor stepped by a prime-ish constant
/// guarantees spread without any collision checking.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ColorWheel {
    cursor: u16,
}

impl ColorWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next color and advance the cursor.
    pub fn next_color(&mut self) -> ColorId {
        let color = ColorId(self.cursor % 360);
        self.cursor = (self.cursor + crate::constants::HUE_STEP_DEGREES) % 360;
        color
    }
}
