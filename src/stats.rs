use std::fmt;
use serde::Serialize;

use crate::error::Error;

// two-sided 95% normal quantile
const CONFIDENCE_Z: f64 = 1.96;

/// Threshold samples for `trials` runs on an `n`×`n` grid.
///
/// Collection and aggregation are separate steps: `record_sample` only appends,
/// `finalize` computes mean, sample standard deviation and the 95% interval once
/// every trial has reported. Accessors read 0.0 until then. With a single trial
/// the sample variance is undefined and `stddev` and both bounds are NaN.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    trials: usize,
    samples: Vec<f64>,
    finalized: bool,
    mean: f64,
    stddev: f64,
    confidence_lo: f64,
    confidence_hi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub n: usize,
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
}

impl PercolationStats {
    pub fn new(n: usize, trials: usize) -> Result<PercolationStats, Error> {
        if n == 0 || trials == 0 {
            return Err(Error::InvalidConfig { n, trials });
        }
        Ok(PercolationStats {
            n,
            trials,
            samples: Vec::new(),
            finalized: false,
            mean: 0.0,
            stddev: 0.0,
            confidence_lo: 0.0,
            confidence_hi: 0.0,
        })
    }

    pub fn record_sample(&mut self, threshold: usize) {
        self.samples.push(threshold as f64);
    }

    /// Records and, on the last expected sample, finalizes right away.
    pub fn add_threshold(&mut self, threshold: usize) {
        self.record_sample(threshold);
        if self.samples.len() == self.trials && !self.finalized {
            self.compute();
        }
    }

    pub fn finalize(&mut self) -> Result<(), Error> {
        if self.samples.len() != self.trials {
            return Err(Error::IncompleteSamples {
                expected: self.trials,
                actual: self.samples.len(),
            });
        }
        if !self.finalized {
            self.compute();
        }
        Ok(())
    }

    fn compute(&mut self) {
        let t = self.trials as f64;
        self.mean = self.samples.iter().sum::<f64>() / t;
        if self.trials == 1 {
            self.stddev = f64::NAN;
        } else {
            let mean = self.mean;
            let squares = self.samples.iter()
                .map(|s| (s - mean).powi(2))
                .sum::<f64>();
            self.stddev = (squares / (t - 1.0)).sqrt();
        }
        let margin = CONFIDENCE_Z * self.stddev / t.sqrt();
        self.confidence_lo = self.mean - margin;
        self.confidence_hi = self.mean + margin;
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    pub fn confidence_low(&self) -> f64 {
        self.confidence_lo
    }

    pub fn confidence_high(&self) -> f64 {
        self.confidence_hi
    }

    pub fn summary(&self) -> Summary {
        Summary {
            n: self.n,
            trials: self.trials,
            mean: self.mean,
            stddev: self.stddev,
            confidence_low: self.confidence_lo,
            confidence_high: self.confidence_hi,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Mean: {}", self.mean)?;
        writeln!(f, "Standard deviation: {}", self.stddev)?;
        writeln!(f, "Confidence lo: {}", self.confidence_low)?;
        write!(f, "Confidence hi: {}", self.confidence_high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_config() {
        assert!(PercolationStats::new(0, 3).is_err());
        assert!(PercolationStats::new(3, 0).is_err());
    }

    #[test]
    fn huge_trial_count_does_not_preallocate() {
        let mut stats = PercolationStats::new(1, usize::MAX).unwrap();
        stats.record_sample(1);
        assert_eq!(stats.samples(), &[1.0][..]);
        assert!(stats.finalize().is_err());
    }

    #[test]
    fn finalize_after_add_threshold_keeps_results() {
        let mut stats = PercolationStats::new(2, 2).unwrap();
        stats.add_threshold(2);
        stats.add_threshold(4);
        stats.finalize().unwrap();
        assert_eq!(stats.mean(), 3.0);
        assert!((stats.stddev() - 2.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn reads_zero_before_finalize() {
        let mut stats = PercolationStats::new(4, 3).unwrap();
        stats.record_sample(7);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.stddev(), 0.0);
        assert_eq!(stats.confidence_low(), 0.0);
        assert_eq!(stats.confidence_high(), 0.0);
        assert!(!stats.is_finalized());
    }

    #[test]
    fn finalize_requires_every_sample() {
        let mut stats = PercolationStats::new(4, 3).unwrap();
        stats.record_sample(7);
        match stats.finalize() {
            Err(Error::IncompleteSamples { expected: 3, actual: 1 }) => {},
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn known_samples() {
        let mut stats = PercolationStats::new(4, 4).unwrap();
        for s in &[2, 4, 4, 6] {
            stats.record_sample(*s);
        }
        stats.finalize().unwrap();
        assert_eq!(stats.mean(), 4.0);
        // squares sum to 8, divided by 3
        let sd = (8.0f64 / 3.0).sqrt();
        assert!((stats.stddev() - sd).abs() < 1e-12);
        let margin = 1.96 * sd / 2.0;
        assert!((stats.confidence_low() - (4.0 - margin)).abs() < 1e-12);
        assert!((stats.confidence_high() - (4.0 + margin)).abs() < 1e-12);
    }

    #[test]
    fn add_threshold_finalizes_on_last_sample() {
        let mut stats = PercolationStats::new(2, 5).unwrap();
        for _ in 0..5 {
            stats.add_threshold(4);
        }
        assert!(stats.is_finalized());
        assert_eq!(stats.mean(), 4.0);
        assert_eq!(stats.stddev(), 0.0);
        assert_eq!(stats.confidence_low(), 4.0);
        assert_eq!(stats.confidence_high(), 4.0);
    }

    #[test]
    fn single_trial_has_undefined_spread() {
        let mut stats = PercolationStats::new(3, 1).unwrap();
        stats.add_threshold(5);
        assert_eq!(stats.mean(), 5.0);
        assert!(stats.stddev().is_nan());
        assert!(stats.confidence_low().is_nan());
        assert!(stats.confidence_high().is_nan());
    }

    #[test]
    fn summary_prints_four_lines() {
        let mut stats = PercolationStats::new(2, 2).unwrap();
        stats.add_threshold(3);
        stats.add_threshold(3);
        let text = stats.summary().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![
            "Mean: 3",
            "Standard deviation: 0",
            "Confidence lo: 3",
            "Confidence hi: 3",
        ]);
    }
}
