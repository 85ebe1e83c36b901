//! Pattern-matching and recursion tasks.

use regex::Regex;

use crate::config::SuiteConfig;
use crate::error::Result;

/// Task 48: validate four candidate addresses against an email pattern.
/// The pattern is recompiled per candidate on purpose; compilation cost is
/// part of the workload.
pub fn regex_emails(_config: &SuiteConfig) -> Result<String> {
    let emails = [
        "user@example.com",
        "john.doe@company.org",
        "invalid-email",
        "another@email.co.uk",
    ];

    let mut valid_count = 0;
    for email in emails {
        let pattern = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")?;
        if pattern.is_match(email) {
            valid_count += 1;
        }
    }
    Ok(format!("Valid emails: {valid_count}"))
}

fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

/// Task 50: naive double-recursive Fibonacci of 40. Exponential on purpose.
pub fn fib_recursive(_config: &SuiteConfig) -> Result<String> {
    let n = 40;
    Ok(format!("Fibonacci({n}) = {}", fibonacci(n)))
}
