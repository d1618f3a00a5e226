//! Configuration overrides carried as `data-*` attributes on the root element.

use super::constants::{ATTR_CELL_SIZE, ATTR_GLYPH, ATTR_PULL_DISTANCE, ATTR_PULL_STRENGTH};
use magnet_core::MagnetConfig;

fn parse_attr(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<f32> {
    let raw = lookup(name)?;
    match raw.trim().parse::<f32>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring {}={:?}: not a number", name, raw);
            None
        }
    }
}

/// Layer attribute overrides on top of `base`. An override set that fails
/// validation is dropped as a whole and `base` is returned.
pub fn apply_overrides(
    base: MagnetConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> MagnetConfig {
    let mut cfg = base.clone();
    if let Some(v) = parse_attr(&lookup, ATTR_CELL_SIZE) {
        cfg.cell_size = v;
    }
    if let Some(v) = parse_attr(&lookup, ATTR_PULL_DISTANCE) {
        cfg.pull_distance = v;
    }
    if let Some(v) = parse_attr(&lookup, ATTR_PULL_STRENGTH) {
        cfg.pull_strength = v;
    }
    if let Some(g) = lookup(ATTR_GLYPH) {
        cfg.glyph = g;
    }
    match cfg.validate() {
        Ok(()) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            base
        }
    }
}
