//! Immutable simulation configuration
//!
//! Constructed once, validated up front, and moved into the simulation.
//! A gap/padding combination that leaves no valid spawn range is rejected
//! here as a construction error, never clamped at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Physics integration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PhysicsPreset {
    /// Velocity-first Euler with a damped floor bounce
    #[default]
    Classic,
    /// Position-first Euler, velocity zeroed on floor contact
    Strict,
}

/// Errors from invalid configuration combinations
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("target obstacle count must be at least 1")]
    NoObstacles,
    #[error("gap size must be positive, got {0}")]
    NonPositiveGap(f32),
    #[error("minimum padding must be non-negative, got {0}")]
    NegativePadding(f32),
    #[error("score-to-win threshold must be at least 1")]
    ZeroScoreThreshold,
    #[error("gap size {gap_size} with padding {min_padding} leaves no valid spawn range")]
    EmptySpawnRange { gap_size: f32, min_padding: f32 },
}

/// Immutable per-instance simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    obstacles_on_screen: usize,
    gap_size: f32,
    min_padding: f32,
    score_to_pass: u32,
    physics: PhysicsPreset,
    /// Derived gap-center spawn range, inclusive
    gap_min: f32,
    gap_max: f32,
}

impl SimConfig {
    /// Validate and build a configuration.
    ///
    /// The gap-center spawn range is centered on the level midline and
    /// shrinks with gap size and padding; it must not be empty.
    pub fn new(
        obstacles_on_screen: usize,
        gap_size: f32,
        min_padding: f32,
        score_to_pass: u32,
        physics: PhysicsPreset,
    ) -> Result<Self, ConfigError> {
        if obstacles_on_screen == 0 {
            return Err(ConfigError::NoObstacles);
        }
        if gap_size <= 0.0 {
            return Err(ConfigError::NonPositiveGap(gap_size));
        }
        if min_padding < 0.0 {
            return Err(ConfigError::NegativePadding(min_padding));
        }
        if score_to_pass == 0 {
            return Err(ConfigError::ZeroScoreThreshold);
        }

        let (gap_min, gap_max) = gap_center_range(gap_size, min_padding);
        if gap_min > gap_max {
            return Err(ConfigError::EmptySpawnRange {
                gap_size,
                min_padding,
            });
        }

        Ok(Self {
            obstacles_on_screen,
            gap_size,
            min_padding,
            score_to_pass,
            physics,
            gap_min,
            gap_max,
        })
    }

    pub fn obstacles_on_screen(&self) -> usize {
        self.obstacles_on_screen
    }

    pub fn gap_size(&self) -> f32 {
        self.gap_size
    }

    pub fn min_padding(&self) -> f32 {
        self.min_padding
    }

    pub fn score_to_pass(&self) -> u32 {
        self.score_to_pass
    }

    pub fn physics(&self) -> PhysicsPreset {
        self.physics
    }

    /// Inclusive range gap centers are sampled from at spawn time
    pub fn gap_center_range(&self) -> (f32, f32) {
        (self.gap_min, self.gap_max)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        match Self::new(
            OBSTACLES_ON_SCREEN,
            GAP_SIZE,
            MIN_PADDING,
            SCORE_TO_PASS,
            PhysicsPreset::Classic,
        ) {
            Ok(config) => config,
            Err(_) => unreachable!("level constants form a valid configuration"),
        }
    }
}

fn gap_center_range(gap_size: f32, min_padding: f32) -> (f32, f32) {
    let offset = (LEVEL_HEIGHT - BOUNDS_HEIGHT * 2.0 - gap_size - min_padding * 2.0) / 2.0;
    (LEVEL_HEIGHT / 2.0 - offset, LEVEL_HEIGHT / 2.0 + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimConfig::default();
        let (lo, hi) = config.gap_center_range();
        assert!(lo <= hi);
        // Sampled centers must keep both barriers at least min_padding tall
        assert!(lo >= BOUNDS_HEIGHT + config.min_padding() + GAP_SIZE / 2.0);
        assert!(hi <= LEVEL_HEIGHT - BOUNDS_HEIGHT - config.min_padding() - GAP_SIZE / 2.0);
        assert_eq!(config.min_padding(), MIN_PADDING);
    }

    #[test]
    fn default_config_goes_through_validation() {
        assert_eq!(
            SimConfig::new(
                OBSTACLES_ON_SCREEN,
                GAP_SIZE,
                MIN_PADDING,
                SCORE_TO_PASS,
                PhysicsPreset::Classic,
            ),
            Ok(SimConfig::default())
        );
    }

    #[test]
    fn oversized_gap_is_rejected() {
        let err = SimConfig::new(4, LEVEL_HEIGHT, 64.0, 16, PhysicsPreset::Classic);
        assert!(matches!(err, Err(ConfigError::EmptySpawnRange { .. })));
    }

    #[test]
    fn degenerate_single_point_range_is_allowed() {
        // Gap plus padding exactly fills the level: spawn range collapses
        // to the midline but stays valid.
        let gap = LEVEL_HEIGHT - BOUNDS_HEIGHT * 2.0 - 2.0 * 64.0;
        let config = SimConfig::new(4, gap, 64.0, 16, PhysicsPreset::Classic).unwrap();
        let (lo, hi) = config.gap_center_range();
        assert_eq!(lo, hi);
        assert_eq!(lo, LEVEL_HEIGHT / 2.0);
    }

    #[test]
    fn zero_counts_are_rejected() {
        assert_eq!(
            SimConfig::new(0, 200.0, 64.0, 16, PhysicsPreset::Classic),
            Err(ConfigError::NoObstacles)
        );
        assert_eq!(
            SimConfig::new(4, 200.0, 64.0, 0, PhysicsPreset::Classic),
            Err(ConfigError::ZeroScoreThreshold)
        );
        assert_eq!(
            SimConfig::new(4, 0.0, 64.0, 16, PhysicsPreset::Classic),
            Err(ConfigError::NonPositiveGap(0.0))
        );
    }
}
