use serde::Serialize;

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One sampled season on-base percentage.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct TrialResult {
    pub trial: usize,
    pub obp: f64,
}

pub trait TrialSink {
    fn push(&mut self, result: TrialResult);
}

/// Collects every trial result in order.
#[derive(Default)]
pub struct TrialAccumulator {
    pub results: Vec<TrialResult>,
}

impl TrialSink for TrialAccumulator {
    fn push(&mut self, result: TrialResult) {
        self.results.push(result);
    }
}

pub struct TrialBlackHole;

impl TrialSink for TrialBlackHole {
    fn push(&mut self, _result: TrialResult) {}
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub trials: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Collects trial results and hands them to the output side: one OBP
/// per line for plotting, plus a JSON summary of the distribution.
#[derive(Default)]
pub struct StatsAccumulator {
    results: Vec<TrialResult>,
}

impl StatsAccumulator {
    pub fn summary(&self) -> Option<Summary> {
        if self.results.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for r in &self.results {
            min = min.min(r.obp);
            max = max.max(r.obp);
            sum += r.obp;
        }
        Some(Summary {
            trials: self.results.len(),
            mean: sum / self.results.len() as f64,
            min,
            max,
        })
    }

    /// Appends one OBP per line, the format the plotting side consumes.
    pub fn write_obp_lines<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);
        for r in &self.results {
            writeln!(writer, "{}", r.obp)?;
        }
        writer.flush()
    }

    pub fn write_summary<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let summary = match self.summary() {
            Some(s) => s,
            None => return Ok(()),
        };
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &summary).map_err(std::io::Error::from)?;
        writer.flush()
    }
}

impl TrialSink for StatsAccumulator {
    fn push(&mut self, result: TrialResult) {
        self.results.push(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> StatsAccumulator {
        let mut acc = StatsAccumulator::default();
        for (trial, obp) in [0.25, 0.5, 0.75].iter().enumerate() {
            acc.push(TrialResult { trial, obp: *obp });
        }
        acc
    }

    #[test]
    fn test_summary() {
        let summary = filled().summary().unwrap();
        assert_eq!(summary.trials, 3);
        assert!((summary.mean - 0.5).abs() < 1e-12);
        assert_eq!(summary.min, 0.25);
        assert_eq!(summary.max, 0.75);

        assert!(StatsAccumulator::default().summary().is_none());
    }

    #[test]
    fn test_write_obp_lines_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("obp.csv");
        let acc = filled();
        acc.write_obp_lines(&path).unwrap();
        acc.write_obp_lines(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let values: Vec<f64> = contents
            .lines()
            .map(|l| l.parse().unwrap())
            .collect();
        assert_eq!(values, vec![0.25, 0.5, 0.75, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        filled().write_summary(&path).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["trials"], 3);
    }
}
