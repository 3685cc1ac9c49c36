//! The timed loops.
//!
//! A run is one strategy over a fixed number of iterations; strategies are never interleaved within a run.  Both loop
//! shapes return the wall-clock time of the whole loop so they can back criterion's `iter_custom` directly.
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::{Fixture, InlineKeys, Key, KeyMode, KeySource, KeyStream, Strategy, Value};

/// Call `f` on `stream.key_at(n)` for `n` in `0..iters`.
#[inline(always)]
pub fn time_stream<F: FnMut(Key) -> Value>(iters: u64, stream: &KeyStream, mut f: F) -> Duration {
    let start = Instant::now();
    for n in 0..iters {
        black_box(f(stream.key_at(n)));
    }
    start.elapsed()
}

/// Call `f` on a fresh random key `iters` times.
#[inline(always)]
pub fn time_inline<F: FnMut(Key) -> Value>(iters: u64, keys: &mut InlineKeys, mut f: F) -> Duration {
    let start = Instant::now();
    for _ in 0..iters {
        black_box(f(keys.next_key()));
    }
    start.elapsed()
}

/// Time `iters` lookups with `strategy`, resolving the strategy before the loop starts.
pub fn time_strategy(
    strategy: Strategy,
    fixture: &Fixture,
    source: &mut KeySource,
    iters: u64,
) -> Duration {
    match source {
        KeySource::Stream(stream) => {
            let stream: &KeyStream = *stream;
            with_strategy_fn!(strategy, fixture, |f| time_stream(iters, stream, f))
        }
        KeySource::Inline(keys) => {
            with_strategy_fn!(strategy, fixture, |f| time_inline(iters, keys, f))
        }
    }
}

/// One completed run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Measurement {
    pub strategy: Strategy,
    pub mode: KeyMode,
    pub iterations: u64,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn ns_per_op(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }

        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }
}

/// Run `strategy` for `iters` iterations and report how long it took.
pub fn measure(strategy: Strategy, fixture: &Fixture, mode: KeyMode, iters: u64, seed: u64) -> Measurement {
    let mut source = KeySource::new(mode, fixture, seed);
    log::debug!(
        "Running {} over {} keys: mode={} iterations={}",
        strategy,
        fixture.key_space(),
        mode,
        iters
    );

    let elapsed = time_strategy(strategy, fixture, &mut source, iters);
    let measurement = Measurement {
        strategy,
        mode,
        iterations: iters,
        elapsed,
    };

    log::debug!("{} done: {:.2} ns/op", strategy, measurement.ns_per_op());
    measurement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeySpace;

    #[test]
    fn test_stream_loop_cycles() {
        let stream = KeyStream::generate(KeySpace::Small, 37, 1).unwrap();
        let mut seen = vec![];
        time_stream(37 * 3, &stream, |k| {
            seen.push(k);
            k
        });

        assert_eq!(seen.len(), 37 * 3);
        assert_eq!(&seen[..37], stream.as_slice());
        assert_eq!(&seen[..37], &seen[37..74]);
        assert_eq!(&seen[..37], &seen[74..]);
    }

    #[test]
    fn test_inline_loop_draws_every_iteration() {
        let mut keys = InlineKeys::new(KeySpace::Large, 9);
        let mut expected = InlineKeys::new(KeySpace::Large, 9);
        let mut calls = 0;
        time_inline(500, &mut keys, |k| {
            assert_eq!(k, expected.next_key());
            calls += 1;
            k
        });
        assert_eq!(calls, 500);
    }

    #[test]
    fn test_measure_every_strategy() {
        for space in KeySpace::ALL {
            let fx = Fixture::build(space, 128, 1).unwrap();
            for mode in KeyMode::ALL {
                for strategy in fx.strategies() {
                    let m = measure(*strategy, &fx, mode, 1000, 1);
                    assert_eq!(m.strategy, *strategy);
                    assert_eq!(m.mode, mode);
                    assert_eq!(m.iterations, 1000);
                    assert!(m.ns_per_op() >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_zero_iterations() {
        let fx = Fixture::build(KeySpace::Small, 4, 1).unwrap();
        let m = measure(Strategy::Map, &fx, KeyMode::Stream, 0, 1);
        assert_eq!(m.iterations, 0);
        assert_eq!(m.ns_per_op(), 0.0);
    }

    #[test]
    fn test_ns_per_op() {
        let m = Measurement {
            strategy: Strategy::Slice,
            mode: KeyMode::Stream,
            iterations: 4,
            elapsed: Duration::from_nanos(10),
        };
        assert_eq!(m.ns_per_op(), 2.5);
    }
}
