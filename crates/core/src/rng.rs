use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const LCG_MUL: u64 = 6364136223846793005;
const LCG_INC: u64 = 1442695040888963407;

/// A source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. Returns 0 for `len <= 1`.
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len - 1)
    }
}

/// 64-bit linear-congruential generator. The whole state is one number, which
/// is also its serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    /// Derive a seed for an independent generator, e.g. one per simulated game.
    pub fn fork_seed(&mut self) -> u64 {
        RngCore::next_u64(self)
    }

    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
        // low bits of a power-of-two LCG are weak; fold the high half down
        self.state ^ (self.state >> 29)
    }
}

impl RandomSource for Lcg {
    fn next_f64(&mut self) -> f64 {
        (self.step() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

/// The random source owned by a `GameState`.
pub enum RngSource {
    Seeded(Lcg),
    Custom(Box<dyn RandomSource>),
}

impl RngSource {
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Lcg::from_seed(seed))
    }

    pub fn custom(source: impl RandomSource + 'static) -> Self {
        Self::Custom(Box::new(source))
    }

    pub fn seed(&self) -> Option<u64> {
        match self {
            Self::Seeded(lcg) => Some(lcg.state()),
            Self::Custom(_) => None,
        }
    }
}

impl Default for RngSource {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl RandomSource for RngSource {
    fn next_f64(&mut self) -> f64 {
        match self {
            Self::Seeded(lcg) => lcg.next_f64(),
            Self::Custom(source) => source.next_f64(),
        }
    }
}

impl fmt::Debug for RngSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seeded(lcg) => f.debug_tuple("Seeded").field(&lcg.state()).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

// Custom sources carry no comparable state.
impl PartialEq for RngSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Seeded(a), Self::Seeded(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for RngSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Seeded(lcg) => serializer.serialize_u64(lcg.state()),
            Self::Custom(_) => Err(serde::ser::Error::custom(
                "a custom random source cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for RngSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let state = u64::deserialize(deserializer)?;
        Ok(Self::seeded(state))
    }
}
