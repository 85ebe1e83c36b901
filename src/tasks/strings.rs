//! String-building, parsing and scanning tasks.
//!
//! Several of these are deliberately quadratic or allocation-heavy; the waste
//! is the workload, so it must not be optimized away.

use crate::config::SuiteConfig;
use crate::error::Result;

/// Task 1: concatenate 10 000 numbers into one string, reallocating on every
/// pass. Reports the first 20 characters.
pub fn concat_numbers(_config: &SuiteConfig) -> Result<String> {
    let mut result = String::new();
    for i in 0..10_000 {
        // Rebuilding the whole string each iteration is the point.
        result = format!("{result}{i} ");
    }
    Ok(format!("{}...", &result[..20]))
}

/// Task 13: parse five fixed decimal strings and sum them.
pub fn parse_ints(_config: &SuiteConfig) -> Result<String> {
    let numbers = ["123", "456", "789", "101", "202"];
    let mut sum = 0i64;
    for raw in numbers {
        sum += raw.parse::<i64>()?;
    }
    Ok(format!("Sum: {sum}"))
}

/// Task 18: clone each word before comparing it against a target, 100 000
/// passes over a five-word list.
pub fn clone_compare(_config: &SuiteConfig) -> Result<String> {
    let words: Vec<String> = ["apple", "banana", "orange", "grape", "pear"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let target = "orange";

    let mut count = 0u64;
    for _ in 0..100_000 {
        for word in &words {
            let temp = word.clone();
            if temp == target {
                count += 1;
            }
        }
    }
    Ok(format!("Count: {count}"))
}

/// Task 20: accumulate the lengths of five names, copying each name out of
/// the list on every visit.
pub fn name_lengths(_config: &SuiteConfig) -> Result<String> {
    let names: Vec<String> = ["John", "Alice", "Bob", "Carol", "Dave"]
        .iter()
        .map(|n| n.to_string())
        .collect();

    let mut total_length = 0u64;
    for _ in 0..100_000 {
        for name in names.iter().cloned() {
            total_length += name.len() as u64;
        }
    }
    Ok(format!("Total length: {total_length}"))
}

/// Task 22: fold 1000 integers into a comma-separated string, rebuilding the
/// accumulator at each step.
pub fn fold_to_string(_config: &SuiteConfig) -> Result<String> {
    let numbers = vec![5; 1000];
    let result = numbers
        .iter()
        .fold(String::new(), |acc, n| format!("{acc}{n},"));
    Ok(format!("Result length: {}", result.len()))
}

/// Task 25: append a single dot 100 000 times through full-copy
/// concatenation.
pub fn string_push_dots(_config: &SuiteConfig) -> Result<String> {
    let mut result = String::new();
    for _ in 0..100_000 {
        result = format!("{result}.");
    }
    Ok(format!("Result length: {}", result.len()))
}

/// Task 33: format a double to four decimal places 100 000 times.
pub fn format_fixed(_config: &SuiteConfig) -> Result<String> {
    let value = 3.141_592_653_589_79f64;
    let mut result = String::new();
    for _ in 0..100_000 {
        result = format!("{value:.4}");
    }
    Ok(format!("Result: {result}"))
}

/// Task 35: split a fixed comma-separated line into tokens, 10 000 times.
pub fn split_fields(_config: &SuiteConfig) -> Result<String> {
    let input = "apple,banana,orange,grape,pear";
    let mut tokens: Vec<&str> = Vec::new();
    for _ in 0..10_000 {
        tokens = input.split(',').collect();
    }
    Ok(format!("Tokens: {}", tokens.len()))
}

/// Task 42: build a 10 000-character run of `a` with one `b` in the middle,
/// then strip every `a`.
pub fn string_purge(_config: &SuiteConfig) -> Result<String> {
    let mut s = "a".repeat(10_000);
    s.replace_range(5000..5001, "b");
    s.retain(|c| c != 'a');
    Ok(s)
}
