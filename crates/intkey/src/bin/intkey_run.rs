//! Run every configured strategy and print ns/op.
//!
//! Usage: `intkey-run [config.json]`.  Set `RUST_LOG=debug` for per-run detail.
use anyhow::Context;

use intkey::config::RunConfig;
use intkey::driver::measure;
use intkey::report::Report;

fn main() -> anyhow::Result<()> {
    intkey_logging::log_to_stderr();

    let path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let config = RunConfig::load(path.as_deref()).context("Could not load the run configuration")?;
    log::info!(
        "Starting: key_space={} mode={} iterations={} repeats={}",
        config.key_space,
        config.key_mode,
        config.iterations,
        config.repeats
    );

    let fixture = config.build_fixture().context("Could not build the fixture")?;

    let mut report = Report::new();
    for strategy in config.strategies.iter().copied() {
        for run in 0..config.repeats {
            let seed = config.seed.wrapping_add(run as u64);
            let m = measure(strategy, &fixture, config.key_mode, config.iterations, seed);
            log::info!("{} run {}: {:.2} ns/op", strategy, run, m.ns_per_op());
            report.push(m);
        }
    }

    print!("{}", report);
    Ok(())
}
