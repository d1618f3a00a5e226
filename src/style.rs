use super::constants::{MARKER_BASE_STYLE, TRANSLATE_PRECISION};
use glam::Vec2;

#[inline]
pub fn marker_style(origin: Vec2) -> String {
    format!("{}left:{}px;top:{}px;", MARKER_BASE_STYLE, origin.x, origin.y)
}

/// CSS `transform` value for a marker displacement.
#[inline]
pub fn translate(offset: Vec2) -> String {
    format!(
        "translate({:.*}px, {:.*}px)",
        TRANSLATE_PRECISION, offset.x, TRANSLATE_PRECISION, offset.y
    )
}
