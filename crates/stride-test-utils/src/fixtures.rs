//! Reusable element fixtures.
//!
//! - [`MapItem`]: a key/value record ordered by `key` only.
//! - [`Pair`]: a two-field record for projection-based ordering.
//! - `i32` byte helpers for driving the type-erased containers.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A key/value record. Maps order it by `key` alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapItem {
    pub key: i32,
    pub value: i32,
}

impl MapItem {
    pub const fn new(key: i32, value: i32) -> Self {
        Self { key, value }
    }

    /// Native-endian encoding, `key` first.
    pub fn to_bytes(self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&self.key.to_ne_bytes());
        out[4..].copy_from_slice(&self.value.to_ne_bytes());
        out
    }

    /// Decode a record produced by [`MapItem::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            key: read_i32(&bytes[..4]),
            value: read_i32(&bytes[4..8]),
        }
    }

    /// Byte-level "less than" on the leading key.
    pub fn key_less(a: &[u8], b: &[u8]) -> bool {
        read_i32(&a[..4]) < read_i32(&b[..4])
    }
}

/// A two-field record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pair {
    pub a: i32,
    pub b: char,
}

/// Concatenated native-endian encodings of `values`.
pub fn i32_bytes(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

/// Decode the first four bytes as an `i32`.
pub fn read_i32(bytes: &[u8]) -> i32 {
    i32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Decode a run of `i32` encodings.
pub fn read_i32s(bytes: &[u8]) -> Vec<i32> {
    bytes.chunks_exact(4).map(read_i32).collect()
}

/// `0..n` as `i32` keys in a seeded, reproducible order.
pub fn shuffled_keys(n: usize, seed: u64) -> Vec<i32> {
    let mut keys: Vec<i32> = (0..n as i32).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    keys.shuffle(&mut rng);
    keys
}
