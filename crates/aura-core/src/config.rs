use serde::Deserialize;
use thiserror::Error;

/// Tunables for the aura particle pool.
///
/// Missing fields fall back to their defaults when deserialized, so a host
/// may override only what it cares about (e.g. `{"particle_count": 12}`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuraConfig {
    /// Pool size, fixed once the engine starts.
    pub particle_count: usize,
    /// Smallest glow radius in pixels (inclusive).
    pub size_min: f64,
    /// Largest glow radius in pixels (exclusive).
    pub size_max: f64,
    /// Per-axis drift bound in pixels per frame.
    pub max_speed: f64,
    /// Upper bound (exclusive) of the per-particle opacity.
    pub max_alpha: f64,
}

impl Default for AuraConfig {
    fn default() -> Self {
        Self {
            particle_count: 20,
            size_min: 50.0,
            size_max: 200.0,
            max_speed: 0.1,
            max_alpha: 0.1,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("particle_count must be at least 1")]
    EmptyPool,
    #[error("invalid size range [{min}, {max}): need 0 < min < max")]
    SizeRange { min: f64, max: f64 },
    #[error("max_speed must be positive and finite, got {0}")]
    Speed(f64),
    #[error("max_alpha must be in (0, 1], got {0}")]
    Alpha(f64),
}

impl AuraConfig {
    /// Checks that every random draw range is non-empty and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::EmptyPool);
        }
        let sizes_ok = self.size_min.is_finite()
            && self.size_max.is_finite()
            && self.size_min > 0.0
            && self.size_min < self.size_max;
        if !sizes_ok {
            return Err(ConfigError::SizeRange {
                min: self.size_min,
                max: self.size_max,
            });
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(ConfigError::Speed(self.max_speed));
        }
        if !(self.max_alpha > 0.0 && self.max_alpha <= 1.0) {
            return Err(ConfigError::Alpha(self.max_alpha));
        }
        Ok(())
    }
}
