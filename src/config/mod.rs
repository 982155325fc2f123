pub mod traits;
pub mod growth;
pub mod noise;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use growth::GrowthConfig;
pub use noise::NoiseConfig;
