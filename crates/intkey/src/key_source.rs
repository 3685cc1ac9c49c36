//! Where timed loops get their keys from.
//!
//! Drawing from an RNG inside the loop adds the cost of the generator to every lookup, so the default is a stream of
//! keys generated up front and reused by wrapping the iteration index.  The inline mode is kept for comparison.
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, FixtureError};
use crate::{Key, KeySpace};

pub const DEFAULT_STREAM_LEN: usize = 1 << 20;
pub const DEFAULT_SEED: u64 = 1;

#[inline(always)]
fn random_key(rng: &mut ChaCha8Rng, data_size: u64) -> Key {
    // Drop the top bit so the draw is a nonnegative int, then reduce.
    ((rng.gen::<u64>() >> 1) % data_size) as Key
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    /// Keys come from a pre-generated [KeyStream].
    Stream,
    /// Keys are drawn from an RNG on every iteration.
    Inline,
}

impl KeyMode {
    pub const ALL: [KeyMode; 2] = [KeyMode::Stream, KeyMode::Inline];

    pub fn name(&self) -> &'static str {
        match self {
            KeyMode::Stream => "stream",
            KeyMode::Inline => "inline",
        }
    }
}

impl Default for KeyMode {
    fn default() -> Self {
        KeyMode::Stream
    }
}

impl std::fmt::Display for KeyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stream" => Ok(KeyMode::Stream),
            "inline" => Ok(KeyMode::Inline),
            _ => Err(ConfigError::UnknownKeyMode(s.to_string())),
        }
    }
}

/// A fixed sequence of keys, read cyclically.
#[derive(Clone, Debug)]
pub struct KeyStream {
    keys: Vec<Key>,
}

impl KeyStream {
    pub fn generate(space: KeySpace, len: usize, seed: u64) -> Result<KeyStream, FixtureError> {
        if len == 0 {
            return Err(FixtureError::EmptyStream);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let data_size = space.data_size() as u64;
        let keys = (0..len).map(|_| random_key(&mut rng, data_size)).collect();
        Ok(KeyStream { keys })
    }

    /// The key for iteration `n`, which is `keys[n % len]`.
    #[inline(always)]
    pub fn key_at(&self, n: u64) -> Key {
        self.keys[(n % self.keys.len() as u64) as usize]
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn as_slice(&self) -> &[Key] {
        &self.keys[..]
    }
}

/// Keys drawn one at a time from a seeded RNG.
#[derive(Clone, Debug)]
pub struct InlineKeys {
    rng: ChaCha8Rng,
    data_size: u64,
}

impl InlineKeys {
    pub fn new(space: KeySpace, seed: u64) -> InlineKeys {
        InlineKeys {
            rng: ChaCha8Rng::seed_from_u64(seed),
            data_size: space.data_size() as u64,
        }
    }

    #[inline(always)]
    pub fn next_key(&mut self) -> Key {
        random_key(&mut self.rng, self.data_size)
    }
}

/// The key source handed to the timing driver.
pub enum KeySource<'a> {
    Stream(&'a KeyStream),
    Inline(InlineKeys),
}

impl<'a> KeySource<'a> {
    /// Borrow the fixture's stream, or start a fresh inline generator.
    pub fn new(mode: KeyMode, fixture: &'a crate::Fixture, seed: u64) -> KeySource<'a> {
        match mode {
            KeyMode::Stream => KeySource::Stream(fixture.stream()),
            KeyMode::Inline => KeySource::Inline(InlineKeys::new(fixture.key_space(), seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_stream_rejected() {
        assert!(matches!(
            KeyStream::generate(KeySpace::Small, 0, 1),
            Err(FixtureError::EmptyStream)
        ));
    }

    #[test]
    fn test_stream_is_deterministic() {
        let a = KeyStream::generate(KeySpace::Large, 1000, 7).unwrap();
        let b = KeyStream::generate(KeySpace::Large, 1000, 7).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_stream_covers_key_space() {
        let stream = KeyStream::generate(KeySpace::Small, 10_000, 1).unwrap();
        let mut seen = [false; 20];
        for k in stream.as_slice() {
            seen[*k as usize] = true;
        }
        assert!(seen.iter().all(|x| *x));
    }

    #[test]
    fn test_inline_matches_stream_with_same_seed() {
        let stream = KeyStream::generate(KeySpace::Large, 100, 3).unwrap();
        let mut inline = InlineKeys::new(KeySpace::Large, 3);
        for k in stream.as_slice() {
            assert_eq!(inline.next_key(), *k);
        }
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("Inline".parse::<KeyMode>().unwrap(), KeyMode::Inline);
        assert!(matches!(
            "random".parse::<KeyMode>(),
            Err(ConfigError::UnknownKeyMode(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_stream_cycles(len in 1..500usize, n in 0..1_000_000u64, seed in any::<u64>()) {
            let stream = KeyStream::generate(KeySpace::Large, len, seed).unwrap();
            prop_assert_eq!(stream.key_at(n), stream.key_at(n + len as u64));
            prop_assert!(KeySpace::Large.contains(stream.key_at(n)));
        }

        #[test]
        fn prop_inline_in_range(seed in any::<u64>()) {
            let mut keys = InlineKeys::new(KeySpace::Small, seed);
            for _ in 0..100 {
                prop_assert!(KeySpace::Small.contains(keys.next_key()));
            }
        }
    }
}
