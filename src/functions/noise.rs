use ::noise::{NoiseFn, Simplex};

/// Coherent 2D noise used by the `SimplexNoise` operator and by the
/// fractal field generator. Implementations must be pure and return
/// values in roughly [-1, 1].
pub trait NoisePrimitive: Send + Sync {
    fn noise2d(&self, x: f32, y: f32) -> f32;
}

impl<F> NoisePrimitive for F
where
    F: Fn(f32, f32) -> f32 + Send + Sync,
{
    fn noise2d(&self, x: f32, y: f32) -> f32 {
        self(x, y)
    }
}

/// Seeded 2D simplex noise
pub struct SimplexNoise {
    seed: u32,
    inner: Simplex,
}

impl SimplexNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            inner: Simplex::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for SimplexNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoisePrimitive for SimplexNoise {
    fn noise2d(&self, x: f32, y: f32) -> f32 {
        self.inner.get([x as f64, y as f64]) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplex_deterministic() {
        let a = SimplexNoise::new(7);
        let b = SimplexNoise::new(7);
        for i in 0..32 {
            let x = i as f32 * 0.37;
            let y = i as f32 * -1.13;
            assert_eq!(a.noise2d(x, y).to_bits(), b.noise2d(x, y).to_bits());
        }
    }

    #[test]
    fn test_simplex_range() {
        let n = SimplexNoise::default();
        for i in 0..200 {
            let v = n.noise2d(i as f32 * 0.173, i as f32 * 0.311);
            assert!((-1.01..=1.01).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_closure_is_primitive() {
        let flat = |x: f32, y: f32| x - y;
        assert_eq!(flat.noise2d(3.0, 1.0), 2.0);
    }
}
