//! Result categories and Shannon entropy.

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome category of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCode {
    /// Started but no status row was recorded.
    NoResult,
    Success,
    Timeout,
    Error,
}

impl ResultCode {
    /// Map a process return value: 0 is success, 124 (coreutils `timeout`)
    /// is a timeout, anything else an error.
    pub fn from_return_value(value: i32) -> Self {
        match value {
            0 => ResultCode::Success,
            124 => ResultCode::Timeout,
            _ => ResultCode::Error,
        }
    }

    /// Numeric code used in tabular output.
    pub fn code(&self) -> i8 {
        match self {
            ResultCode::NoResult => -1,
            ResultCode::Success => 0,
            ResultCode::Timeout => 1,
            ResultCode::Error => 2,
        }
    }
}

/// Shannon entropy, in bits, of the category distribution of `samples`.
///
/// Zero when every sample falls in one category, and for no samples at all.
pub fn entropy(samples: &[ResultCode]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut counts: BTreeMap<ResultCode, usize> = BTreeMap::new();
    for sample in samples {
        *counts.entry(*sample).or_default() += 1;
    }

    let n = samples.len() as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_values_map_to_categories() {
        assert_eq!(ResultCode::from_return_value(0), ResultCode::Success);
        assert_eq!(ResultCode::from_return_value(124), ResultCode::Timeout);
        assert_eq!(ResultCode::from_return_value(1), ResultCode::Error);
        assert_eq!(ResultCode::from_return_value(-9), ResultCode::Error);
    }

    #[test]
    fn uniform_samples_have_zero_entropy() {
        assert_eq!(entropy(&[]), 0.0);
        assert_eq!(entropy(&[ResultCode::Success; 5]), 0.0);
    }

    #[test]
    fn even_split_is_one_bit() {
        let samples = [ResultCode::Success, ResultCode::Timeout];
        assert!((entropy(&samples) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn three_way_split() {
        let samples = [
            ResultCode::Success,
            ResultCode::Timeout,
            ResultCode::Error,
        ];
        assert!((entropy(&samples) - 3f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn skewed_split() {
        let samples = [
            ResultCode::Success,
            ResultCode::Success,
            ResultCode::Success,
            ResultCode::Error,
        ];
        // -(0.75 log2 0.75 + 0.25 log2 0.25)
        assert!((entropy(&samples) - 0.811_278_124_459_132_8).abs() < 1e-12);
    }
}
