use rand::{Error, RngCore, SeedableRng};

/// Seedable PRNG producing the mulberry32 sequence.
///
/// One `u32` of state, one output per step. The same seed yields the same
/// sequence on every platform, which the demand generator relies on for
/// reproducible fixtures. Not cryptographic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`: the updated 32-bit state divided by 2^32.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4294967296.0
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        // All intermediate arithmetic wraps at 32 bits; widening here would
        // change the sequence.
        let mut t = self.state.wrapping_add(0x6D2B_79F5);
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        self.state = t ^ (t >> 14);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32()) << 32 | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Seeds wider than 32 bits are truncated rather than rejected.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
