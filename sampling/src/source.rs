use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_core::RngCore;
use rand_distr::{Distribution, StandardNormal};

const MAXF64: f64 = 9007199254740992.0;

/// Deterministic sample generator backed by ChaCha8.
///
/// Tests and benches seed it with a fixed value so that reference and
/// accelerated kernels are fed identical buffers.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        min + ((self.next_u64() << 11 >> 11) as f64) / MAXF64 * (max - min)
    }

    /// Centered gaussian with standard deviation `sigma`.
    #[inline(always)]
    pub fn next_gaussian(&mut self, sigma: f64) -> f64 {
        let z: f64 = StandardNormal.sample(self);
        z * sigma
    }

    #[inline(always)]
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    #[inline(always)]
    pub fn next_i16(&mut self) -> i16 {
        self.next_u32() as i16
    }

    #[inline(always)]
    pub fn next_i8(&mut self) -> i8 {
        self.next_u32() as i8
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
