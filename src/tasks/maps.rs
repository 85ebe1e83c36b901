//! Associative-container tasks: hash and ordered map/set construction and
//! lookup loops.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::SuiteConfig;
use crate::error::Result;

/// Task 5: build a hash set from 0..10 000 via an intermediate vector, then
/// probe 1000 multiples of five. Every probe hits.
pub fn hashset_probe(_config: &SuiteConfig) -> Result<String> {
    let mut temp = Vec::new();
    for i in 0..10_000 {
        temp.push(i);
    }
    let numbers: HashSet<i32> = temp.into_iter().collect();

    let mut lookups = 0;
    for i in 0..1000 {
        if numbers.contains(&(i * 5)) {
            lookups += 1;
        }
    }
    Ok(format!("Found: {lookups}"))
}

/// Task 8: check-then-index three fixed keys in an ordered map, 10 000
/// times. The double lookup per key is the workload.
pub fn btreemap_lookup_sum(_config: &SuiteConfig) -> Result<String> {
    let mut counts = BTreeMap::new();
    counts.insert("apple", 5i64);
    counts.insert("banana", 7);
    counts.insert("orange", 12);

    let mut total = 0i64;
    for _ in 0..10_000 {
        for key in ["apple", "banana", "orange"] {
            if counts.contains_key(key) {
                total += counts[key];
            }
        }
    }
    Ok(format!("Total: {total}"))
}

/// Task 17: insert 100 000 identity pairs into a hash map, then count
/// membership of every key.
pub fn hashmap_membership(_config: &SuiteConfig) -> Result<String> {
    let mut m = HashMap::new();
    for i in 0..100_000 {
        m.insert(i, i);
    }
    let mut sum = 0u64;
    for i in 0..100_000 {
        sum += u64::from(m.contains_key(&i));
    }
    Ok(format!("{sum}"))
}

/// Task 19: read five fixed keys out of an ordered map, 100 000 passes.
pub fn btreemap_bulk_reads(_config: &SuiteConfig) -> Result<String> {
    let mut counts = BTreeMap::new();
    counts.insert("apple", 5i64);
    counts.insert("banana", 7);
    counts.insert("orange", 12);
    counts.insert("grape", 3);
    counts.insert("pear", 9);

    let mut total = 0i64;
    for _ in 0..100_000 {
        for key in ["apple", "banana", "orange", "grape", "pear"] {
            total += counts[key];
        }
    }
    Ok(format!("Total: {total}"))
}

/// Task 34: one million hits against a five-element hash set of words.
pub fn hashset_hit_loop(_config: &SuiteConfig) -> Result<String> {
    let words: HashSet<String> = ["apple", "banana", "orange", "grape", "pear"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    let target = "orange";
    let mut count = 0u64;
    for _ in 0..1_000_000 {
        if words.contains(target) {
            count += 1;
        }
    }
    Ok(format!("Count: {count}"))
}

/// Task 38: fill an ordered map with 10 000 generated strings, then confirm
/// every key is present.
pub fn btreemap_strings(_config: &SuiteConfig) -> Result<String> {
    let mut data = BTreeMap::new();
    for i in 0..10_000 {
        data.insert(i, format!("Value{i}"));
    }

    let mut count = 0;
    for i in 0..10_000 {
        if data.contains_key(&i) {
            count += 1;
        }
    }
    Ok(format!("Count: {count}"))
}
