//! Tunable parameters for grid layout and pointer pull.

use crate::constants::{
    CELL_SIZE, DECAY_FACTOR, EASE_FACTOR, EPSILON, MARKER_GLYPH, MIN_CELL_SIZE, PULL_DISTANCE,
    PULL_STRENGTH,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be a finite number of at least 1px, got {0}")]
    CellSize(f32),
    #[error("pull distance must be a positive finite number, got {0}")]
    PullDistance(f32),
    #[error("pull strength must be finite and non-negative, got {0}")]
    PullStrength(f32),
    #[error("ease factor must lie in (0, 1], got {0}")]
    Ease(f32),
    #[error("decay factor must lie in (0, 1], got {0}")]
    Decay(f32),
    #[error("epsilon must be finite and non-negative, got {0}")]
    Epsilon(f32),
    #[error("marker glyph must not be empty")]
    EmptyGlyph,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MagnetConfig {
    pub cell_size: f32,
    pub pull_distance: f32,
    pub pull_strength: f32,
    pub ease: f32,
    pub decay: f32,
    pub epsilon: f32,
    pub glyph: String,
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            pull_distance: PULL_DISTANCE,
            pull_strength: PULL_STRENGTH,
            ease: EASE_FACTOR,
            decay: DECAY_FACTOR,
            epsilon: EPSILON,
            glyph: MARKER_GLYPH.to_string(),
        }
    }
}

#[inline]
fn unit_interval(v: f32) -> bool {
    v.is_finite() && v > 0.0 && v <= 1.0
}

impl MagnetConfig {
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Check every field; the first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size >= MIN_CELL_SIZE) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(self.pull_distance.is_finite() && self.pull_distance > 0.0) {
            return Err(ConfigError::PullDistance(self.pull_distance));
        }
        if !(self.pull_strength.is_finite() && self.pull_strength >= 0.0) {
            return Err(ConfigError::PullStrength(self.pull_strength));
        }
        if !unit_interval(self.ease) {
            return Err(ConfigError::Ease(self.ease));
        }
        if !unit_interval(self.decay) {
            return Err(ConfigError::Decay(self.decay));
        }
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(ConfigError::Epsilon(self.epsilon));
        }
        if self.glyph.is_empty() {
            return Err(ConfigError::EmptyGlyph);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(MagnetConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_undersized_cell_size() {
        let cfg = MagnetConfig::default().with_cell_size(0.0);
        assert_eq!(cfg.validate(), Err(ConfigError::CellSize(0.0)));
        let cfg = MagnetConfig::default().with_cell_size(f32::NAN);
        assert!(matches!(cfg.validate(), Err(ConfigError::CellSize(_))));
        let cfg = MagnetConfig::default().with_cell_size(0.0001);
        assert_eq!(cfg.validate(), Err(ConfigError::CellSize(0.0001)));
        assert_eq!(MagnetConfig::default().with_cell_size(1.0).validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_factors() {
        let cfg = MagnetConfig {
            ease: 1.5,
            ..MagnetConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Ease(1.5)));

        let cfg = MagnetConfig {
            decay: 0.0,
            ..MagnetConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Decay(0.0)));

        let cfg = MagnetConfig {
            glyph: String::new(),
            ..MagnetConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyGlyph));
    }

    #[test]
    fn error_messages_name_the_value() {
        let msg = ConfigError::PullDistance(-3.0).to_string();
        assert!(msg.contains("-3"), "unexpected message: {msg}");
    }
}
