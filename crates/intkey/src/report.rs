//! Collects measurements per strategy and renders ns/op figures.
use crate::driver::Measurement;
use crate::Strategy;

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub strategy: Strategy,
    pub runs: usize,
    pub best_ns: f64,
    pub mean_ns: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Report {
    /// In the order strategies were first seen.
    rows: Vec<(Strategy, Vec<Measurement>)>,
}

impl Report {
    pub fn new() -> Report {
        Default::default()
    }

    pub fn push(&mut self, measurement: Measurement) {
        match self.rows.iter_mut().find(|(s, _)| *s == measurement.strategy) {
            Some((_, runs)) => runs.push(measurement),
            None => self.rows.push((measurement.strategy, vec![measurement])),
        }
    }

    pub fn measurements(&self, strategy: Strategy) -> &[Measurement] {
        self.rows
            .iter()
            .find(|(s, _)| *s == strategy)
            .map(|(_, runs)| &runs[..])
            .unwrap_or(&[])
    }

    pub fn summary(&self) -> Vec<SummaryRow> {
        self.rows
            .iter()
            .map(|(strategy, runs)| {
                let per_op = runs.iter().map(|m| m.ns_per_op());
                let best_ns = per_op.clone().fold(f64::INFINITY, f64::min);
                let mean_ns = per_op.sum::<f64>() / runs.len() as f64;
                SummaryRow {
                    strategy: *strategy,
                    runs: runs.len(),
                    best_ns,
                    mean_ns,
                }
            })
            .collect()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<10} {:>6} {:>14} {:>14}", "strategy", "runs", "best ns/op", "mean ns/op")?;
        for row in self.summary() {
            writeln!(
                f,
                "{:<10} {:>6} {:>14.2} {:>14.2}",
                row.strategy.name(),
                row.runs,
                row.best_ns,
                row.mean_ns
            )?;
        }
        Ok(())
    }
}
