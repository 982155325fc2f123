use super::traits::ConfigSection;
use crate::error::TexgenError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Operators inserted before leaves close the tree
    pub operator_count: usize,
    /// Seed for the tree generator; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            operator_count: 12,
            seed: None,
        }
    }
}

impl ConfigSection for GrowthConfig {
    fn section_name() -> &'static str {
        "growth"
    }

    fn validate(&self) -> Result<(), TexgenError> {
        if self.operator_count == 0 {
            return Err(TexgenError::Configuration(
                "Operator count must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
