//! The two key space sizes the harness measures against.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::Key;

pub const SMALL_DATA_SIZE: usize = 20;
pub const LARGE_DATA_SIZE: usize = 250;

/// A contiguous range of keys `[0, data_size)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeySpace {
    Small,
    Large,
}

impl KeySpace {
    pub const ALL: [KeySpace; 2] = [KeySpace::Small, KeySpace::Large];

    pub const fn data_size(&self) -> usize {
        match self {
            KeySpace::Small => SMALL_DATA_SIZE,
            KeySpace::Large => LARGE_DATA_SIZE,
        }
    }

    #[inline(always)]
    pub fn contains(&self, key: Key) -> bool {
        key >= 0 && (key as u64) < self.data_size() as u64
    }

    /// Iterate over every key in this space, in order.
    pub fn keys(&self) -> impl Iterator<Item = Key> {
        0..self.data_size() as Key
    }
}

impl Default for KeySpace {
    fn default() -> Self {
        KeySpace::Large
    }
}

impl std::fmt::Display for KeySpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data_size())
    }
}

impl FromStr for KeySpace {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "20" | "small" => Ok(KeySpace::Small),
            "250" | "large" => Ok(KeySpace::Large),
            _ => Err(ConfigError::UnknownKeySpace(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(KeySpace::Small.data_size(), 20);
        assert_eq!(KeySpace::Large.data_size(), 250);
        assert_eq!(KeySpace::Large.keys().count(), 250);
    }

    #[test]
    fn test_contains() {
        let ks = KeySpace::Small;
        assert!(ks.contains(0));
        assert!(ks.contains(19));
        assert!(!ks.contains(20));
        assert!(!ks.contains(-1));
        assert!(!ks.contains(Key::MIN));
    }

    #[test]
    fn test_parse() {
        assert_eq!("20".parse::<KeySpace>().unwrap(), KeySpace::Small);
        assert_eq!("LARGE".parse::<KeySpace>().unwrap(), KeySpace::Large);
        assert!(matches!(
            "21".parse::<KeySpace>(),
            Err(ConfigError::UnknownKeySpace(_))
        ));
    }
}
