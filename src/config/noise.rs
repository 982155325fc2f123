use super::traits::ConfigSection;
use crate::error::TexgenError;
use crate::types::NoiseType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub kind: NoiseType,
    pub frequency: f32,
    pub lacunarity: f32,
    pub gain: f32,
    pub octaves: usize,
    pub width: usize,
    pub height: usize,
    /// Seed of the default simplex primitive
    pub seed: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            kind: NoiseType::Fbm,
            frequency: 0.01,
            lacunarity: 2.0,
            gain: 0.5,
            octaves: 4,
            width: 256,
            height: 256,
            seed: 0,
        }
    }
}

impl ConfigSection for NoiseConfig {
    fn section_name() -> &'static str {
        "noise"
    }

    fn validate(&self) -> Result<(), TexgenError> {
        if self.width == 0 || self.height == 0 {
            return Err(TexgenError::Configuration(format!(
                "Grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(TexgenError::Configuration(format!(
                "Grid {}x{} is too large",
                self.width, self.height
            )));
        }
        if self.octaves == 0 {
            return Err(TexgenError::Configuration(
                "Octaves must be at least 1".to_string()
            ));
        }
        for (name, value) in [
            ("frequency", self.frequency),
            ("lacunarity", self.lacunarity),
            ("gain", self.gain),
        ] {
            if !value.is_finite() {
                return Err(TexgenError::Configuration(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
