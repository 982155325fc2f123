use crate::config::{traits::ConfigSection, NoiseConfig};
use crate::engines::synthesis::grid::{fill_parallel, Field};
use crate::error::Result;
use crate::functions::NoisePrimitive;
use crate::types::NoiseType;

/// Fractional Brownian motion: sum of `octaves` noise samples, each at
/// `lacunarity` times the previous frequency and `gain` times the
/// previous amplitude.
pub fn fbm<N: NoisePrimitive + ?Sized>(
    noise: &N,
    x: f32,
    y: f32,
    frequency: f32,
    lacunarity: f32,
    gain: f32,
    octaves: usize,
) -> f32 {
    let mut sum = 0.0f32;
    let mut freq = frequency;
    let mut amplitude = 1.0f32;
    for _ in 0..octaves {
        sum += noise.noise2d(x * freq, y * freq) * amplitude;
        freq *= lacunarity;
        amplitude *= gain;
    }
    sum
}

/// Like [`fbm`] but sums the absolute value of each octave
pub fn turbulence<N: NoisePrimitive + ?Sized>(
    noise: &N,
    x: f32,
    y: f32,
    frequency: f32,
    lacunarity: f32,
    gain: f32,
    octaves: usize,
) -> f32 {
    let mut sum = 0.0f32;
    let mut freq = frequency;
    let mut amplitude = 1.0f32;
    for _ in 0..octaves {
        sum += noise.noise2d(x * freq, y * freq).abs() * amplitude;
        freq *= lacunarity;
        amplitude *= gain;
    }
    sum
}

/// Computes fractal noise fields over a grid with a fixed fan-out of
/// workers.
pub struct FieldGenerator<N: NoisePrimitive> {
    noise: N,
    workers: usize,
}

impl<N: NoisePrimitive> FieldGenerator<N> {
    /// One partition per thread of the rayon pool
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            workers: rayon::current_num_threads(),
        }
    }

    /// Override the partition count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Compute the field described by `params`.
    ///
    /// Parameters are validated before any work is spawned; the call
    /// blocks until every partition is done.
    pub fn generate(&self, params: &NoiseConfig) -> Result<Field> {
        params.validate()?;

        let NoiseConfig {
            kind,
            frequency,
            lacunarity,
            gain,
            octaves,
            width,
            height,
            ..
        } = *params;
        let noise = &self.noise;

        let field = match kind {
            NoiseType::Fbm => fill_parallel(width, height, self.workers, |x, y| {
                fbm(noise, x, y, frequency, lacunarity, gain, octaves)
            }),
            NoiseType::Turbulence => fill_parallel(width, height, self.workers, |x, y| {
                turbulence(noise, x, y, frequency, lacunarity, gain, octaves)
            }),
        };

        log::info!(
            "Generated {:?} field {}x{} ({} octaves): range [{}, {}]",
            kind,
            width,
            height,
            octaves,
            field.min,
            field.max
        );

        Ok(field)
    }
}
