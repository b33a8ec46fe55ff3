use rand::{
    distributions::{Distribution, Standard},
    RngCore, SeedableRng,
};

const STATE: u64 = 0x853c49e6748fea9b;
const STREAM: u64 = 0xda3e39cb94b95bdb;
const MULTIPLY: u64 = 0x5851f42d4c957f2d;

/// Anything that can produce uniformly distributed floats in [0, 1).
///
/// Every `rand::RngCore` is a uniform source, so both [`Rng`] and the
/// generators from the `rand` crate can be handed to the samplers.
pub trait UniformSource {
    /// Draw a uniformly distributed number in the range [0, 1)
    fn uniform(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UniformSource for R {
    fn uniform(&mut self) -> f64 {
        Standard.sample(self)
    }
}

/// PCG32 pseudo random number generator: 64 bits of state, 32 bit output
/// with a selectable stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rng {
    state: u64,
    inc: u64,
}

impl Default for Rng {
    fn default() -> Self {
        Self {
            state: STATE,
            inc: STREAM,
        }
    }
}

impl Rng {
    /// Create a rng on the given stream, starting from the default state
    pub fn new(sequence_index: u64) -> Self {
        Self::with_state(sequence_index, STATE)
    }

    /// Create a rng on the given stream, starting from a chosen state
    pub fn with_state(sequence_index: u64, initial_state: u64) -> Self {
        let mut this = Self::default();
        this.set_sequence(sequence_index, initial_state);
        this
    }

    /// Set the seed of the random number generator
    fn set_sequence(&mut self, index: u64, initial_state: u64) {
        self.state = 0;
        self.inc = (index << 1) | 1;
        self.uniform_u32();
        self.state = self.state.wrapping_add(initial_state);
        self.uniform_u32();
    }

    /// Generate a new uniformly distributed u32 random number
    pub fn uniform_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old.wrapping_mul(MULTIPLY).wrapping_add(self.inc);
        let shift = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        shift.rotate_right(rot)
    }

    /// Generate a new uniformly distributed u64, high half drawn first
    pub fn uniform_u64(&mut self) -> u64 {
        let high = self.uniform_u32() as u64;
        let low = self.uniform_u32() as u64;
        (high << 32) | low
    }

    /// Generate a uniformly distributed double from 53 bits of random data.
    /// The output will be in the range [0, 1).
    pub fn uniform_f64(&mut self) -> f64 {
        let step = 2.0f64.powi(-53);
        (self.uniform_u64() >> 11) as f64 * step
    }
}

impl RngCore for Rng {
    fn next_u32(&mut self) -> u32 {
        self.uniform_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.uniform_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.uniform_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Rng {
    /// little endian initial state followed by the stream index
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0; 8];
        let mut stream = [0; 8];
        state.copy_from_slice(&seed[0..8]);
        stream.copy_from_slice(&seed[8..16]);
        Self::with_state(u64::from_le_bytes(stream), u64::from_le_bytes(state))
    }
}
