//! Deterministic Random Number Generator
//!
//! Xorshift128+ seeded through SplitMix64. Every random decision in a run
//! (question picks, pickup lanes, gate colors, question ids) draws from a
//! single instance owned by the world, so a seed plus the frame-by-frame
//! command record replays a run exactly.

use serde::{Deserialize, Serialize};

/// Deterministic PRNG (xorshift128+).
///
/// Not cryptographically secure. Fast, small state, good enough
/// distribution for gameplay.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: [u64; 2],
}

impl DeterministicRng {
    /// Create a new RNG from a seed.
    ///
    /// The seed is expanded with SplitMix64 so similar seeds produce
    /// unrelated streams.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let s0 = splitmix64(&mut s);
        let s1 = splitmix64(&mut s);
        // xorshift128+ must never have all-zero state
        let state = if s0 == 0 && s1 == 0 { [1, 1] } else { [s0, s1] };
        DeterministicRng { state }
    }

    /// Generate the next random u64.
    pub fn next_u64(&mut self) -> u64 {
        let mut s1 = self.state[0];
        let s0 = self.state[1];
        let result = s0.wrapping_add(s1);

        self.state[0] = s0;
        s1 ^= s1 << 23;
        self.state[1] = s1 ^ s0 ^ (s1 >> 18) ^ (s0 >> 5);

        result
    }

    /// Generate a random u32.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a random integer in [0, max).
    ///
    /// Returns 0 if max is 0. Uses simple modulo; the bias is negligible
    /// for the small ranges gameplay asks for.
    pub fn next_int(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Generate a random index in [0, len).
    ///
    /// Returns 0 if len is 0.
    #[inline]
    pub fn next_index(&mut self, len: usize) -> usize {
        self.next_int(len as u32) as usize
    }

    /// Generate a random f32 in [0, 1).
    ///
    /// Built from the top 24 bits so every value is exactly representable.
    pub fn next_f32(&mut self) -> f32 {
        const SCALE: f32 = 1.0 / (1u32 << 24) as f32;
        (self.next_u64() >> 40) as f32 * SCALE
    }

    /// Random boolean that is true with the given probability.
    ///
    /// A probability at or below 0 never fires, at or above 1 always does.
    #[inline]
    pub fn chance(&mut self, probability: f32) -> bool {
        self.next_f32() < probability
    }

    /// Pick a random element from a slice. Returns None on an empty slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            None
        } else {
            slice.get(self.next_index(slice.len()))
        }
    }

    /// Generate 16 random bytes for an id.
    pub fn id_bytes(&mut self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.next_u64().to_le_bytes());
        bytes[8..].copy_from_slice(&self.next_u64().to_le_bytes());
        bytes
    }
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(0)
    }
}

/// SplitMix64: expands a seed into well-distributed state words.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
