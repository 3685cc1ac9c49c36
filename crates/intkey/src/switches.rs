//! Fixed-arity `match` lookups.
//!
//! Each arity is its own function with its own literal arms, since the number of arms is what is being measured.
//! The arms are evenly spaced from zero across the key space.
use crate::{Key, KeySpace, Value, SENTINEL};

macro_rules! switch_fn {
    ($name:ident, $cases:ident, [$($case:literal),+ $(,)?]) => {
        pub const $cases: &[Key] = &[$($case),+];

        #[inline(never)]
        pub fn $name(key: Key) -> Value {
            match key {
                $($case => $case,)+
                _ => SENTINEL,
            }
        }
    };
}

/// Arms for the 20-key space.
pub mod small {
    use super::*;

    switch_fn!(switch1, SWITCH1_CASES, [0]);
    switch_fn!(switch5, SWITCH5_CASES, [0, 4, 8, 12, 16]);
    switch_fn!(switch10, SWITCH10_CASES, [0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
    switch_fn!(
        switch20,
        SWITCH20_CASES,
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19]
    );
}

/// Arms for the 250-key space.
pub mod large {
    use super::*;

    switch_fn!(switch1, SWITCH1_CASES, [0]);
    switch_fn!(switch5, SWITCH5_CASES, [0, 50, 100, 150, 200]);
    switch_fn!(
        switch10,
        SWITCH10_CASES,
        [0, 25, 50, 75, 100, 125, 150, 175, 200, 225]
    );
    // 250 / 20 isn't whole, so stride 12.
    switch_fn!(
        switch20,
        SWITCH20_CASES,
        [0, 12, 24, 36, 48, 60, 72, 84, 96, 108, 120, 132, 144, 156, 168, 180, 192, 204, 216, 228]
    );
}

/// The literal arms of the switch with `arity` arms in `space`, if there is one.
pub fn cases(space: KeySpace, arity: usize) -> Option<&'static [Key]> {
    Some(match (space, arity) {
        (KeySpace::Small, 1) => small::SWITCH1_CASES,
        (KeySpace::Small, 5) => small::SWITCH5_CASES,
        (KeySpace::Small, 10) => small::SWITCH10_CASES,
        (KeySpace::Small, 20) => small::SWITCH20_CASES,
        (KeySpace::Large, 1) => large::SWITCH1_CASES,
        (KeySpace::Large, 5) => large::SWITCH5_CASES,
        (KeySpace::Large, 10) => large::SWITCH10_CASES,
        (KeySpace::Large, 20) => large::SWITCH20_CASES,
        _ => return None,
    })
}
