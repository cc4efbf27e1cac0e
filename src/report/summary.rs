//! Spread of board rates across independently seeded replicas.

use std::fmt::Write as _;

use serde::Serialize;

use crate::board::Status;
use crate::report::{rate_per_scale, RATE_SCALE};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterSummary {
    pub name: &'static str,
    pub mean_rate: f64,
    pub std_dev: f64,
    pub min_rate: f64,
    pub max_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplicaSummary {
    pub replicas: usize,
    pub iterations: u64,
    pub counters: Vec<CounterSummary>,
}

impl ReplicaSummary {
    /// Per-counter statistics of the per-10 rate. Uses the population standard deviation.
    pub fn from_runs(runs: &[Status], iterations: u64) -> Self {
        let names = Status::default().counters().map(|(name, _)| name);
        let counters = names
            .iter()
            .enumerate()
            .map(|(column, name)| {
                let rates: Vec<f64> = runs
                    .iter()
                    .map(|status| rate_per_scale(status.counters()[column].1, iterations))
                    .collect();
                summarize(*name, &rates)
            })
            .collect();

        Self {
            replicas: runs.len(),
            iterations,
            counters,
        }
    }

    pub fn format(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} replicas x {} iterations",
            self.replicas, self.iterations
        );
        for c in &self.counters {
            let _ = writeln!(
                out,
                "{}: {:.2} +/- {:.2} per {RATE_SCALE} (min {:.2}, max {:.2})",
                c.name, c.mean_rate, c.std_dev, c.min_rate, c.max_rate
            );
        }
        out
    }
}

fn summarize(name: &'static str, rates: &[f64]) -> CounterSummary {
    if rates.is_empty() {
        return CounterSummary {
            name,
            mean_rate: 0.0,
            std_dev: 0.0,
            min_rate: 0.0,
            max_rate: 0.0,
        };
    }
    let n = rates.len() as f64;
    let mean = rates.iter().sum::<f64>() / n;
    let variance = rates.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    CounterSummary {
        name,
        mean_rate: mean,
        std_dev: variance.sqrt(),
        min_rate: rates.iter().copied().fold(f64::INFINITY, f64::min),
        max_rate: rates.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_runs_have_no_spread() {
        let status = Status {
            laps: 5,
            pieces: 10,
            ..Status::default()
        };
        let summary = ReplicaSummary::from_runs(&[status, status, status], 100);
        assert_eq!(summary.replicas, 3);
        let laps = &summary.counters[0];
        assert_eq!(laps.name, "Laps");
        assert!((laps.mean_rate - 0.5).abs() < 1e-12);
        assert_eq!(laps.std_dev, 0.0);
    }

    #[test]
    fn spread_uses_population_std_dev() {
        let a = Status {
            pieces: 10,
            ..Status::default()
        };
        let b = Status {
            pieces: 30,
            ..Status::default()
        };
        let summary = ReplicaSummary::from_runs(&[a, b], 10);
        let pieces = &summary.counters[1];
        assert!((pieces.mean_rate - 20.0).abs() < 1e-12);
        assert!((pieces.std_dev - 10.0).abs() < 1e-12);
        assert_eq!(pieces.min_rate, 10.0);
        assert_eq!(pieces.max_rate, 30.0);
    }

    #[test]
    fn format_lists_header_and_counters() {
        let status = Status {
            laps: 2,
            ..Status::default()
        };
        let text = ReplicaSummary::from_runs(&[status], 10).format();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "1 replicas x 10 iterations");
        assert_eq!(lines[1], "Laps: 2.00 +/- 0.00 per 10 (min 2.00, max 2.00)");
    }

    #[test]
    fn no_runs_yield_zeroed_counters() {
        let summary = ReplicaSummary::from_runs(&[], 10);
        assert_eq!(summary.counters.len(), 6);
        assert!(summary.counters.iter().all(|c| c.mean_rate == 0.0));
    }
}
