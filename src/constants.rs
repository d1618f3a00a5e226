// DOM-facing constants for the web front-end.

// Page contract
pub const ROOT_ELEMENT_ID: &str = "magnet-grid"; // container that receives every marker
pub const MARKER_CLASS: &str = "magnet-marker";

// Inline style applied to each marker before its position
pub const MARKER_BASE_STYLE: &str = "position:absolute;pointer-events:none;will-change:transform;";

// Optional overrides read from the root element
pub const ATTR_CELL_SIZE: &str = "data-cell-size";
pub const ATTR_PULL_DISTANCE: &str = "data-pull-distance";
pub const ATTR_PULL_STRENGTH: &str = "data-pull-strength";
pub const ATTR_GLYPH: &str = "data-glyph";

// Decimal places kept when writing a translation
pub const TRANSLATE_PRECISION: usize = 2;
