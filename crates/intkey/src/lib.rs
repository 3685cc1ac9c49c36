//! A harness comparing ways to map a small integer key to a small integer value.
//!
//! Four families of lookup are measured: a do-nothing baseline, `match` chains of 1/5/10/20 arms, direct slice
//! indexing, and a hash map.  All tables are built once by [Fixture::build] before any timed region starts, and keys
//! come either from a pre-generated [KeyStream] consumed cyclically or from an RNG called inline.
//!
//! Every lookup is total: in-range keys map to themselves and anything else yields [SENTINEL].

/// Keys and values are machine-width signed integers.
pub type Key = i64;
pub type Value = i64;

/// Returned for any key a strategy doesn't map.
pub const SENTINEL: Value = 0;

#[macro_use]
mod strategy;

pub mod config;
pub mod driver;
mod errors;
mod fixture;
mod key_source;
mod key_space;
pub mod report;
pub mod switches;

pub use errors::*;
pub use fixture::*;
pub use key_source::*;
pub use key_space::*;
pub use strategy::*;
