pub mod noise;

pub use self::noise::{NoisePrimitive, SimplexNoise};
