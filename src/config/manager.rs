use super::{growth::GrowthConfig, noise::NoiseConfig, traits::ConfigSection};
use crate::error::TexgenError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `TEXGEN__NOISE__OCTAVES=6`
pub const ENV_PREFIX: &str = "TEXGEN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub growth: GrowthConfig,
    pub noise: NoiseConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), TexgenError> {
        self.growth.validate()?;
        self.noise.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TexgenError> {
        let contents = std::fs::read_to_string(path)?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| TexgenError::Configuration(format!("Failed to parse config: {}", e)))?;

        self.replace(config)
    }

    /// Load a TOML or JSON file (chosen by extension), then apply
    /// `TEXGEN__<SECTION>__<FIELD>` environment overrides on top.
    pub fn load_layered<P: AsRef<Path>>(&self, path: Option<P>) -> Result<(), TexgenError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path.as_ref()));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| TexgenError::Configuration(format!("Failed to load config: {}", e)))?;

        self.replace(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TexgenError> {
        let toml_str = toml::to_string_pretty(&self.get())
            .map_err(|e| TexgenError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Apply `f` and keep the result only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), TexgenError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }

    fn replace(&self, config: AppConfig) -> Result<(), TexgenError> {
        config.validate()?;
        log::debug!("Loaded config: {:?}", config);
        *self.config.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
        Ok(())
    }
}
