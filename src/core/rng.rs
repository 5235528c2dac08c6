//! Deterministic random number generation for motion variety.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical flights and layouts
//! - **Forkable**: Give each deck its own independent stream
//! - **Context streams**: Separate sequences for layout jitter and curves
//!
//! ## Usage
//!
//! ```
//! use card_flight::core::FlightRng;
//!
//! let root = FlightRng::new(42);
//!
//! // Curve randomness never shifts when layout draws change
//! let mut curves = root.for_context("curve");
//! let mut layout = root.for_context("layout");
//!
//! let a = curves.gen_unit();
//! let b = layout.gen_unit();
//! assert!((0.0..1.0).contains(&a));
//! assert!((0.0..1.0).contains(&b));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG used for curve shapes and stack jitter.
///
/// Uses ChaCha8 for speed with good statistical quality.
#[derive(Clone, Debug)]
pub struct FlightRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl FlightRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Uniform value in `[low, high)`. Returns `low` for an empty range.
    pub fn gen_between(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        low + self.gen_unit() * (high - low)
    }

    /// Uniform value in `[-magnitude, magnitude)`.
    pub fn gen_symmetric(&mut self, magnitude: f32) -> f32 {
        (self.gen_unit() - 0.5) * 2.0 * magnitude
    }

    /// `1.0` or `-1.0` with equal probability.
    pub fn gen_sign(&mut self) -> f32 {
        if self.inner.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}
