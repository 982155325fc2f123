use texgen::config::NoiseConfig;
use texgen::engines::synthesis::{fbm, turbulence};
use texgen::{FieldGenerator, NoisePrimitive, NoiseType, SimplexNoise, TexgenError};

/// Smooth deterministic stand-in with both signs over the grid
fn wave(x: f32, y: f32) -> f32 {
    (x * 0.7).sin() * (y * 0.3 + 0.2).cos()
}

fn params(kind: NoiseType, octaves: usize, width: usize, height: usize) -> NoiseConfig {
    NoiseConfig {
        kind,
        frequency: 0.9,
        lacunarity: 2.0,
        gain: 0.5,
        octaves,
        width,
        height,
        seed: 0,
    }
}

/// Single-threaded reference: cell values and plain min/max fold
fn reference<N: NoisePrimitive>(noise: &N, p: &NoiseConfig) -> (Vec<f32>, f32, f32) {
    let mut values = Vec::with_capacity(p.width * p.height);
    for j in 0..p.width * p.height {
        let x = (j % p.width) as f32;
        let y = (j / p.width) as f32;
        values.push(match p.kind {
            NoiseType::Fbm => fbm(noise, x, y, p.frequency, p.lacunarity, p.gain, p.octaves),
            NoiseType::Turbulence => {
                turbulence(noise, x, y, p.frequency, p.lacunarity, p.gain, p.octaves)
            }
        });
    }
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    (values, min, max)
}

#[test]
fn test_single_octave_fbm_is_raw_noise() {
    let p = params(NoiseType::Fbm, 1, 9, 4);
    let field = FieldGenerator::new(wave).with_workers(4).generate(&p).unwrap();
    for y in 0..4 {
        for x in 0..9 {
            let expected = wave(x as f32 * 0.9, y as f32 * 0.9);
            assert_eq!(field.get(x, y), Some(expected));
        }
    }
}

#[test]
fn test_single_octave_turbulence_is_abs_noise() {
    let p = params(NoiseType::Turbulence, 1, 6, 6);
    let field = FieldGenerator::new(wave).with_workers(5).generate(&p).unwrap();
    for j in 0..36 {
        let (x, y) = ((j % 6) as f32, (j / 6) as f32);
        assert_eq!(field.samples[j], wave(x * 0.9, y * 0.9).abs());
    }
    assert!(field.min >= 0.0);
}

#[test]
fn test_matches_reference_for_uneven_partitions() {
    let sizes = [(1, 1), (3, 1), (7, 3), (10, 10), (13, 11), (64, 17)];
    for workers in [1, 2, 3, 4, 7, 16, 200] {
        for &(w, h) in &sizes {
            for kind in [NoiseType::Fbm, NoiseType::Turbulence] {
                let p = params(kind, 3, w, h);
                let field = FieldGenerator::new(wave)
                    .with_workers(workers)
                    .generate(&p)
                    .unwrap();
                let (values, min, max) = reference(&wave, &p);
                assert_eq!(field.samples, values, "{}x{} / {} workers", w, h, workers);
                assert_eq!(field.min, min, "{}x{} / {} workers", w, h, workers);
                assert_eq!(field.max, max, "{}x{} / {} workers", w, h, workers);
            }
        }
    }
}

#[test]
fn test_last_cell_is_computed() {
    // Last cell holds the global max; a dropped tail would miss it
    let ramp = |x: f32, y: f32| x + y * 100.0;
    let p = NoiseConfig {
        frequency: 1.0,
        ..params(NoiseType::Fbm, 1, 5, 5)
    };
    let field = FieldGenerator::new(ramp).with_workers(3).generate(&p).unwrap();
    assert_eq!(field.samples[24], 404.0);
    assert_eq!(field.max, 404.0);
    assert_eq!(field.min, 0.0);
}

#[test]
fn test_all_negative_field_has_negative_max() {
    // Zero-seeded bounds would report max = 0 here
    let below = |x: f32, _y: f32| -1.0 - x;
    let p = NoiseConfig {
        frequency: 1.0,
        ..params(NoiseType::Fbm, 1, 4, 3)
    };
    let field = FieldGenerator::new(below).with_workers(2).generate(&p).unwrap();
    assert_eq!(field.max, -1.0);
    assert_eq!(field.min, -4.0);
}

#[test]
fn test_default_worker_count_matches_pool() {
    let generator = FieldGenerator::new(wave);
    assert_eq!(generator.workers(), rayon::current_num_threads());
    let field = generator.generate(&params(NoiseType::Fbm, 4, 33, 21)).unwrap();
    let (values, min, max) = reference(&wave, &params(NoiseType::Fbm, 4, 33, 21));
    assert_eq!(field.samples, values);
    assert_eq!((field.min, field.max), (min, max));
}

#[test]
fn test_rejects_invalid_parameters() {
    let generator = FieldGenerator::new(wave);
    for p in [
        params(NoiseType::Fbm, 0, 4, 4),
        params(NoiseType::Fbm, 2, 0, 4),
        params(NoiseType::Turbulence, 2, 4, 0),
        NoiseConfig {
            lacunarity: f32::INFINITY,
            ..params(NoiseType::Fbm, 2, 4, 4)
        },
    ] {
        assert!(matches!(
            generator.generate(&p),
            Err(TexgenError::Configuration(_))
        ));
    }
}

#[test]
fn test_simplex_field_in_expected_range() {
    let p = NoiseConfig {
        frequency: 0.05,
        ..params(NoiseType::Turbulence, 4, 48, 32)
    };
    let field = FieldGenerator::new(SimplexNoise::new(3)).generate(&p).unwrap();
    // Turbulence is bounded by the amplitude sum 1 + 1/2 + 1/4 + 1/8
    assert!(field.min >= 0.0);
    assert!(field.max <= 1.875 * 1.01);
    assert!(field.max > field.min);
}
