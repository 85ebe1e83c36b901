//! Sequence-container tasks: growth, traversal, sorting and searching over
//! vectors, deques, linked lists and a binary heap.

use std::collections::{BinaryHeap, LinkedList, VecDeque};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::SuiteConfig;
use crate::error::Result;

/// Task 2: grow a vector one push at a time to 100 000 elements.
pub fn vec_push_growth(_config: &SuiteConfig) -> Result<String> {
    let mut numbers = Vec::new();
    for i in 0..100_000 {
        numbers.push(i);
    }
    Ok(format!("Size: {}", numbers.len()))
}

fn create_and_process(mut data: Vec<i32>) -> Vec<i32> {
    for i in 0..1000 {
        data.push(i);
    }
    data
}

/// Task 4: hand a 10 000-element vector to a by-value helper that appends
/// 1000 more. The caller keeps its own copy.
pub fn vec_by_value(_config: &SuiteConfig) -> Result<String> {
    let my_data = vec![42; 10_000];
    let result = create_and_process(my_data.clone());
    Ok(format!("Size: {}", result.len()))
}

/// Task 9: fill a vector in descending order, sort it, report the ends.
pub fn sort_reversed(_config: &SuiteConfig) -> Result<String> {
    let mut numbers = Vec::new();
    for i in (1..=10_000).rev() {
        numbers.push(i);
    }
    numbers.sort_unstable();
    let first = numbers.first().copied().unwrap_or_default();
    let last = numbers.last().copied().unwrap_or_default();
    Ok(format!("First: {first}, Last: {last}"))
}

/// Task 12: remove even elements while scanning by index. The index still
/// advances after a removal, so the element shifted into the hole is skipped;
/// that quirk is part of the workload.
pub fn remove_even_shift(_config: &SuiteConfig) -> Result<String> {
    let mut numbers: Vec<i32> = (0..10_000).collect();
    let mut i = 0;
    while i < numbers.len() {
        if numbers[i] % 2 == 0 {
            numbers.remove(i);
        }
        i += 1;
    }
    Ok(format!("Remaining elements: {}", numbers.len()))
}

/// Task 14: probe a 10 000-element linked list at 1000 seeded-random
/// positions, walking from the head each time.
pub fn list_random_probe(config: &SuiteConfig) -> Result<String> {
    let mut list: LinkedList<u64> = LinkedList::new();
    for i in 0..10_000u64 {
        list.push_back(i);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut sum = 0u64;
    for _ in 0..1000 {
        let index = rng.gen_range(0..list.len());
        sum += list.iter().nth(index).copied().unwrap_or_default();
    }
    Ok(format!("Sum: {sum}"))
}

/// Task 23: draw 100 000 values from a fixed-seed generator, sort, report the
/// minimum. `LinkedList` has no in-place sort, so a vector carries the
/// draw-then-sort workload.
pub fn list_sort_min(_config: &SuiteConfig) -> Result<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut values: Vec<u32> = (0..100_000).map(|_| rng.gen()).collect();
    values.sort_unstable();
    Ok(format!("{}", values.first().copied().unwrap_or_default()))
}

/// Task 30: sum a five-element array one million times.
pub fn array_sum_repeat(_config: &SuiteConfig) -> Result<String> {
    let data: [u64; 5] = [0, 1, 2, 3, 4];
    let mut sum = 0u64;
    for _ in 0..1_000_000 {
        sum += data.iter().sum::<u64>();
    }
    Ok(format!("Sum: {sum}"))
}

/// Task 31: fill a million-element vector by index, report the last slot.
pub fn vec_fill_index(_config: &SuiteConfig) -> Result<String> {
    let mut v = vec![0; 1_000_000];
    for slot in v.iter_mut() {
        *slot = 42;
    }
    Ok(format!("{}", v.last().copied().unwrap_or_default()))
}

fn get_values() -> Vec<i64> {
    vec![42; 5]
}

/// Task 32: rescan a small returned vector 100 000 times.
pub fn small_vec_rescan(_config: &SuiteConfig) -> Result<String> {
    let values = get_values();
    let mut sum = 0i64;
    for _ in 0..100_000 {
        for val in &values {
            sum += val;
        }
    }
    Ok(format!("Sum: {sum}"))
}

/// Task 36: build a max-heap from 0..100 000 and report the top.
pub fn binary_heap_top(_config: &SuiteConfig) -> Result<String> {
    let heap: BinaryHeap<u32> = (0..100_000).collect();
    Ok(format!("{}", heap.peek().copied().unwrap_or_default()))
}

/// Task 39: index-based sum over a vector of ones.
pub fn indexed_sum(_config: &SuiteConfig) -> Result<String> {
    let data = vec![1u64; 10_000];
    let mut sum = 0u64;
    for i in 0..data.len() {
        sum += data[i];
    }
    Ok(format!("Sum: {sum}"))
}

/// Task 43: write doubled values by index, then sum them by index.
pub fn vec_double_sum(_config: &SuiteConfig) -> Result<String> {
    let mut v = vec![0i64; 10_000];
    for i in 0..v.len() {
        v[i] = i as i64 * 2;
    }
    let mut sum = 0i64;
    for i in 0..v.len() {
        sum += v[i];
    }
    Ok(format!("{sum}"))
}

/// Task 44: row-major traversal of a 10 000 × 10 000 matrix of ones.
pub fn matrix_sum(_config: &SuiteConfig) -> Result<String> {
    const SIZE: usize = 10_000;
    let matrix = vec![vec![1i32; SIZE]; SIZE];
    let mut sum = 0i64;
    for row in 0..SIZE {
        for col in 0..SIZE {
            sum += i64::from(matrix[row][col]);
        }
    }
    Ok(format!("Sum: {sum}"))
}

/// Task 46: push 10 000 elements onto the front of a deque.
pub fn deque_push_front(_config: &SuiteConfig) -> Result<String> {
    let mut d = VecDeque::new();
    for i in 0..10_000 {
        d.push_front(i);
    }
    Ok(format!("{}", d.front().copied().unwrap_or_default()))
}

/// Task 47: linear scan of a sorted vector for its last element.
pub fn linear_search(_config: &SuiteConfig) -> Result<String> {
    let mut sorted_data = vec![0i32; 10_000];
    for i in 0..sorted_data.len() {
        sorted_data[i] = i as i32 * 2;
    }

    let target = 19_998;
    let mut found = false;
    for &num in &sorted_data {
        if num == target {
            found = true;
            break;
        }
    }
    Ok(format!("Found: {found}"))
}

/// Task 49: push 0..1000 and sum by reference.
pub fn vec_push_sum(_config: &SuiteConfig) -> Result<String> {
    let mut values = Vec::new();
    for i in 0..1000u64 {
        values.push(i);
    }
    let mut sum = 0u64;
    for value in &values {
        sum += value;
    }
    Ok(format!("Sum: {sum}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuiteConfig;

    fn config() -> SuiteConfig {
        SuiteConfig::with_seed(7)
    }

    #[test]
    fn push_growth_reaches_target_size() {
        assert_eq!(vec_push_growth(&config()).unwrap(), "Size: 100000");
    }

    #[test]
    fn by_value_helper_appends_without_touching_caller() {
        assert_eq!(vec_by_value(&config()).unwrap(), "Size: 11000");
    }

    #[test]
    fn sorting_restores_ascending_ends() {
        assert_eq!(sort_reversed(&config()).unwrap(), "First: 1, Last: 10000");
    }

    #[test]
    fn shifted_scan_keeps_the_odds() {
        assert_eq!(remove_even_shift(&config()).unwrap(), "Remaining elements: 5000");
    }

    #[test]
    fn random_probe_is_deterministic_for_a_seed() {
        let first = list_random_probe(&config()).unwrap();
        let second = list_random_probe(&config()).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("Sum: "));
    }

    #[test]
    fn sort_min_is_stable_across_runs() {
        assert_eq!(
            list_sort_min(&config()).unwrap(),
            list_sort_min(&config()).unwrap()
        );
    }

    #[test]
    fn heap_top_is_largest_inserted() {
        assert_eq!(binary_heap_top(&config()).unwrap(), "99999");
    }

    #[test]
    fn indexed_sum_counts_every_one() {
        assert_eq!(indexed_sum(&config()).unwrap(), "Sum: 10000");
    }

    #[test]
    fn doubled_sum_matches_closed_form() {
        // 2 * (0 + 1 + ... + 9999)
        assert_eq!(vec_double_sum(&config()).unwrap(), "99990000");
    }

    #[test]
    fn deque_front_is_last_pushed() {
        assert_eq!(deque_push_front(&config()).unwrap(), "9999");
    }

    #[test]
    fn linear_search_hits_final_element() {
        assert_eq!(linear_search(&config()).unwrap(), "Found: true");
    }

    #[test]
    fn push_sum_matches_gauss() {
        assert_eq!(vec_push_sum(&config()).unwrap(), "Sum: 499500");
    }
}
