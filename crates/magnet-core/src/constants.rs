// Default tuning for the magnetic grid. `MagnetConfig::default()` reads these.

// Layout
pub const CELL_SIZE: f32 = 50.0; // side of one grid cell in px
pub const MARKER_GLYPH: &str = "+"; // text shown by every marker
pub const MIN_CELL_SIZE: f32 = 1.0; // px; smaller cells are rejected by config validation
pub const MAX_GRID_AXIS: usize = 16_384; // rows/cols ceiling for absurd viewports

// Pull
pub const PULL_DISTANCE: f32 = 600.0; // px radius beyond which the pointer has no influence
pub const PULL_STRENGTH: f32 = 0.4; // max displacement as a fraction of cell size

// Motion
pub const EASE_FACTOR: f32 = 0.2; // fraction of the remaining gap closed per step
pub const DECAY_FACTOR: f32 = 0.9; // extra damping applied when out of range
pub const EPSILON: f32 = 0.01; // px; below this an axis counts as settled
