//! The lookup strategies under measurement.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::{Fixture, Key, LookupMap, Value, SENTINEL};

/// Does no lookup at all, to measure call and key retrieval overhead.
#[inline(never)]
pub fn baseline(_key: Key) -> Value {
    SENTINEL
}

/// Index the slice by key, or the sentinel if the key falls outside of it.
#[inline(never)]
pub fn slice_lookup(slice: &[Value], key: Key) -> Value {
    usize::try_from(key)
        .ok()
        .and_then(|i| slice.get(i))
        .copied()
        .unwrap_or(SENTINEL)
}

#[inline(never)]
pub fn map_lookup(map: &LookupMap, key: Key) -> Value {
    map.get(&key).copied().unwrap_or(SENTINEL)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Baseline,
    Switch1,
    Switch5,
    Switch10,
    Switch20,
    Slice,
    Map,
}

/// Bind `$f` to the concrete lookup for `$strategy` against `$fixture` and evaluate `$body` with it.
///
/// The match runs once; `$body` is expanded per arm so that any loop inside it calls a known function rather than
/// going through a pointer.
macro_rules! with_strategy_fn {
    ($strategy:expr, $fixture:expr, |$f:ident| $body:expr) => {{
        use $crate::switches::{large, small};
        use $crate::KeySpace::{Large, Small};
        use $crate::Strategy::*;

        let fixture: &$crate::Fixture = $fixture;
        match ($strategy, fixture.key_space()) {
            (Baseline, _) => {
                let $f = $crate::baseline;
                $body
            }
            (Switch1, Small) => {
                let $f = small::switch1;
                $body
            }
            (Switch5, Small) => {
                let $f = small::switch5;
                $body
            }
            (Switch10, Small) => {
                let $f = small::switch10;
                $body
            }
            (Switch20, Small) => {
                let $f = small::switch20;
                $body
            }
            (Switch1, Large) => {
                let $f = large::switch1;
                $body
            }
            (Switch5, Large) => {
                let $f = large::switch5;
                $body
            }
            (Switch10, Large) => {
                let $f = large::switch10;
                $body
            }
            (Switch20, Large) => {
                let $f = large::switch20;
                $body
            }
            (Slice, _) => {
                let slice = fixture.slice();
                let $f = move |k: $crate::Key| $crate::slice_lookup(slice, k);
                $body
            }
            (Map, _) => {
                let map = fixture.map();
                let $f = move |k: $crate::Key| $crate::map_lookup(map, k);
                $body
            }
        }
    }};
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Baseline,
        Strategy::Switch1,
        Strategy::Switch5,
        Strategy::Switch10,
        Strategy::Switch20,
        Strategy::Slice,
        Strategy::Map,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Baseline => "baseline",
            Strategy::Switch1 => "switch1",
            Strategy::Switch5 => "switch5",
            Strategy::Switch10 => "switch10",
            Strategy::Switch20 => "switch20",
            Strategy::Slice => "slice",
            Strategy::Map => "map",
        }
    }

    /// Number of arms, for the switch strategies.
    pub fn switch_arity(&self) -> Option<usize> {
        match self {
            Strategy::Switch1 => Some(1),
            Strategy::Switch5 => Some(5),
            Strategy::Switch10 => Some(10),
            Strategy::Switch20 => Some(20),
            _ => None,
        }
    }

    /// Look `key` up with this strategy.
    ///
    /// Dispatches on every call, so timed loops go through [crate::driver] instead.
    pub fn lookup(&self, fixture: &Fixture, key: Key) -> Value {
        with_strategy_fn!(*self, fixture, |f| f(key))
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|st| st.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}
