//! Tables built once, before any measurement.
use std::collections::HashMap;

use crate::errors::FixtureError;
use crate::{Key, KeySpace, KeyStream, Strategy, Value};

pub type LookupMap = HashMap<Key, Value, ahash::RandomState>;

/// The read-only state every timed loop borrows.
///
/// Both tables hold the identity mapping over the key space.
#[derive(Clone, Debug)]
pub struct Fixture {
    key_space: KeySpace,
    map: LookupMap,
    slice: Vec<Value>,
    stream: KeyStream,
}

impl Fixture {
    pub fn build(key_space: KeySpace, stream_len: usize, seed: u64) -> Result<Fixture, FixtureError> {
        let data_size = key_space.data_size();

        let mut map = LookupMap::with_capacity_and_hasher(data_size, Default::default());
        let mut slice = Vec::with_capacity(data_size);
        for k in key_space.keys() {
            map.insert(k, k);
            slice.push(k);
        }

        let stream = KeyStream::generate(key_space, stream_len, seed)?;

        log::debug!(
            "Built fixture: data_size={} map_entries={} stream_len={} seed={}",
            data_size,
            map.len(),
            stream.len(),
            seed
        );

        Ok(Fixture {
            key_space,
            map,
            slice,
            stream,
        })
    }

    pub fn key_space(&self) -> KeySpace {
        self.key_space
    }

    pub fn map(&self) -> &LookupMap {
        &self.map
    }

    pub fn slice(&self) -> &[Value] {
        &self.slice[..]
    }

    pub fn stream(&self) -> &KeyStream {
        &self.stream
    }

    pub fn strategies(&self) -> &'static [Strategy] {
        &Strategy::ALL
    }
}
