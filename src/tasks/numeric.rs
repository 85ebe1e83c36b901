//! Arithmetic tasks: series, reductions and bit manipulation.

use crate::config::SuiteConfig;
use crate::error::Result;

/// Task 11: sum the first twenty powers of two.
pub fn pow2_series(_config: &SuiteConfig) -> Result<String> {
    let mut result = 0i64;
    for i in 0..20 {
        result += 2i64.pow(i);
    }
    Ok(format!("{result}"))
}

fn calculate_sum(values: Vec<i64>) -> i64 {
    values.iter().sum()
}

/// Task 15: sum a 100 000-element vector of ones ten times through a
/// by-value helper. The clone per call is the workload.
pub fn sum_by_value(_config: &SuiteConfig) -> Result<String> {
    let numbers = vec![1i64; 100_000];
    let mut sum = 0i64;
    for _ in 0..10 {
        sum += calculate_sum(numbers.clone());
    }
    Ok(format!("Sum: {sum}"))
}

/// Task 24: iterator sum over a million ones.
pub fn vec_sum_million(_config: &SuiteConfig) -> Result<String> {
    let v = vec![1i64; 1_000_000];
    let sum: i64 = v.iter().sum();
    Ok(format!("{sum}"))
}

/// Task 29: accumulate a precomputed sine one million times.
pub fn sin_accumulate(_config: &SuiteConfig) -> Result<String> {
    let angle = 0.785f64;
    let sin_val = angle.sin();
    let mut result = 0.0;
    for _ in 0..1_000_000 {
        result += sin_val;
    }
    Ok(format!("{result:.0}"))
}

/// Task 40: shift-and-mask accumulation over a million offsets.
pub fn bit_shuffle(_config: &SuiteConfig) -> Result<String> {
    let x: u64 = 123_456;
    let mut sum: u64 = 0;
    for i in 0..1_000_000u64 {
        sum += (x + i) >> 4;
        sum += (x + i) & 15;
    }
    Ok(format!("{sum}"))
}
