use std::fmt;

use serde::Serialize;

use crate::SummaryError;

/// Mean, population standard deviation, min and max of a score sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl SummaryStats {
    /// Fails with `EmptySample` when `scores` is empty.
    pub fn from_scores(variant: &str, scores: &[f64]) -> Result<Self, SummaryError> {
        if scores.is_empty() {
            return Err(SummaryError::empty_sample(variant));
        }
        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let mut min = scores[0];
        let mut max = scores[0];
        for &s in &scores[1..] {
            if s < min {
                min = s;
            }
            if s > max {
                max = s;
            }
        }
        Ok(Self {
            mean,
            stddev: variance.sqrt(),
            min,
            max,
            samples: scores.len(),
        })
    }
}

/// Wraps an `f64` so it prints in shortest round-trip form with at least one
/// fractional digit, switching to a signed two-digit exponent outside
/// `[1e-4, 1e16)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decimal(pub f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return f.write_str("nan");
        }
        if x.is_infinite() {
            return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
        }
        if x == 0.0 {
            return f.write_str(if x.is_sign_negative() { "-0.0" } else { "0.0" });
        }
        let sci = format!("{x:e}");
        let (mantissa, exp) = match sci.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (sci.as_str(), 0),
        };
        if (-4..16).contains(&exp) {
            let plain = x.to_string();
            if plain.contains('.') {
                f.write_str(&plain)
            } else {
                write!(f, "{plain}.0")
            }
        } else {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{mantissa}e{sign}{:02}", exp.abs())
        }
    }
}
