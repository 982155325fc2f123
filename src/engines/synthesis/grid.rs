use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Running (min, max) over a set of samples.
///
/// Starts at `(+inf, -inf)` so that folding any sample or any other
/// extent moves it. NaN samples are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f32,
    pub max: f32,
}

impl Extent {
    pub const EMPTY: Extent = Extent {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    pub fn include(&mut self, value: f32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn merge(self, other: Extent) -> Extent {
        Extent {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for Extent {
    fn default() -> Self {
        Extent::EMPTY
    }
}

/// A W×H grid of samples in row-major order plus their global range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<f32>,
    pub min: f32,
    pub max: f32,
}

impl Field {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at cell (x, y)
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.samples.get(y * self.width + x).copied()
    }

    pub fn extent(&self) -> Extent {
        Extent {
            min: self.min,
            max: self.max,
        }
    }
}

/// Split `0..len` into `parts` contiguous ranges of `len / parts` cells.
/// The last range absorbs the remainder, so every index is covered once.
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let batch = len / parts;
    (0..parts)
        .map(|i| {
            let start = i * batch;
            let end = if i == parts - 1 { len } else { start + batch };
            start..end
        })
        .collect()
}

/// Evaluate `sample(x, y)` for every cell of a `width`×`height` grid
/// across `workers` partitions and reduce the per-partition extents.
///
/// Callers validate the dimensions.
pub(crate) fn fill_parallel<F>(width: usize, height: usize, workers: usize, sample: F) -> Field
where
    F: Fn(f32, f32) -> f32 + Sync,
{
    let len = width * height;
    let mut samples = vec![0.0f32; len];
    let ranges = partition(len, workers);

    log::debug!(
        "Filling {}x{} grid over {} partitions of ~{} cells",
        width,
        height,
        ranges.len(),
        len / ranges.len()
    );

    let mut chunks = Vec::with_capacity(ranges.len());
    let mut rest = samples.as_mut_slice();
    for range in &ranges {
        let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        chunks.push((range.start, chunk));
        rest = tail;
    }

    let extent = chunks
        .into_par_iter()
        .map(|(offset, chunk)| {
            let mut local = Extent::EMPTY;
            for (i, cell) in chunk.iter_mut().enumerate() {
                let j = offset + i;
                let x = j % width;
                let y = j / width;
                *cell = sample(x as f32, y as f32);
                local.include(*cell);
            }
            local
        })
        .reduce(|| Extent::EMPTY, Extent::merge);

    Field {
        width,
        height,
        samples,
        min: extent.min,
        max: extent.max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_covers_every_index_once() {
        for len in [0, 1, 7, 64, 101] {
            for parts in [1, 2, 3, 8, 16] {
                let ranges = partition(len, parts);
                assert_eq!(ranges.len(), parts);
                let mut next = 0;
                for r in &ranges {
                    assert_eq!(r.start, next);
                    next = r.end;
                }
                assert_eq!(next, len);
            }
        }
    }

    #[test]
    fn test_partition_last_absorbs_remainder() {
        let ranges = partition(10, 3);
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn test_extent_min_then_max_same_value() {
        // A single value must move both bounds
        let mut e = Extent::EMPTY;
        e.include(-2.0);
        assert_eq!(e, Extent { min: -2.0, max: -2.0 });
        e.include(5.0);
        assert_eq!(e, Extent { min: -2.0, max: 5.0 });
    }

    #[test]
    fn test_extent_merge_order_independent() {
        let a = Extent { min: -1.0, max: 0.5 };
        let b = Extent { min: -3.0, max: -2.0 };
        let c = Extent { min: 0.0, max: 9.0 };
        let left = a.merge(b).merge(c);
        let right = c.merge(a.merge(b));
        assert_eq!(left, right);
        assert_eq!(left, Extent { min: -3.0, max: 9.0 });
        assert_eq!(Extent::EMPTY.merge(a), a);
        assert!(Extent::EMPTY.is_empty());
    }

    #[test]
    fn test_fill_parallel_row_major() {
        let field = fill_parallel(5, 3, 4, |x, y| y * 10.0 + x);
        assert_eq!(field.len(), 15);
        assert_eq!(field.get(4, 2), Some(24.0));
        assert_eq!(field.samples[7], 12.0);
        assert_eq!(field.min, 0.0);
        assert_eq!(field.max, 24.0);
        assert_eq!(field.get(5, 0), None);
    }
}
