//! The fifty task bodies, grouped by idiom family.
//!
//! Ordinals are fixed: reports and `--only` selections refer to them, and the
//! default run executes them in ascending order. Tasks share nothing beyond
//! the [`SuiteConfig`](crate::config::SuiteConfig) they all receive, so the
//! order is free to change without affecting any result.

pub mod collections;
pub mod fileio;
pub mod maps;
pub mod numeric;
pub mod objects;
pub mod patterns;
pub mod strings;
pub mod threads;

use crate::runner::Task;

/// The full suite in execution order.
pub fn all() -> Vec<Task> {
    vec![
        Task { id: 1, name: "string_concat", run: strings::concat_numbers },
        Task { id: 2, name: "vec_push_growth", run: collections::vec_push_growth },
        Task { id: 3, name: "discard_writes", run: fileio::discard_writes },
        Task { id: 4, name: "vec_by_value", run: collections::vec_by_value },
        Task { id: 5, name: "hashset_probe", run: maps::hashset_probe },
        Task { id: 6, name: "shared_parity", run: objects::shared_parity },
        Task { id: 7, name: "struct_collect", run: objects::struct_collect },
        Task { id: 8, name: "btreemap_lookup_sum", run: maps::btreemap_lookup_sum },
        Task { id: 9, name: "sort_reversed", run: collections::sort_reversed },
        Task { id: 10, name: "file_roundtrip", run: fileio::file_roundtrip },
        Task { id: 11, name: "pow2_series", run: numeric::pow2_series },
        Task { id: 12, name: "remove_even_shift", run: collections::remove_even_shift },
        Task { id: 13, name: "parse_ints", run: strings::parse_ints },
        Task { id: 14, name: "list_random_probe", run: collections::list_random_probe },
        Task { id: 15, name: "sum_by_value", run: numeric::sum_by_value },
        Task { id: 16, name: "atomic_counter", run: threads::atomic_counter },
        Task { id: 17, name: "hashmap_membership", run: maps::hashmap_membership },
        Task { id: 18, name: "clone_compare", run: strings::clone_compare },
        Task { id: 19, name: "btreemap_bulk_reads", run: maps::btreemap_bulk_reads },
        Task { id: 20, name: "name_lengths", run: strings::name_lengths },
        Task { id: 21, name: "log_append", run: fileio::log_append },
        Task { id: 22, name: "fold_to_string", run: strings::fold_to_string },
        Task { id: 23, name: "list_sort_min", run: collections::list_sort_min },
        Task { id: 24, name: "vec_sum_million", run: numeric::vec_sum_million },
        Task { id: 25, name: "string_push_dots", run: strings::string_push_dots },
        Task { id: 26, name: "dyn_dispatch", run: objects::dyn_dispatch },
        Task { id: 27, name: "accumulator_struct", run: objects::accumulator_struct },
        Task { id: 28, name: "first_person", run: objects::first_person },
        Task { id: 29, name: "sin_accumulate", run: numeric::sin_accumulate },
        Task { id: 30, name: "array_sum_repeat", run: collections::array_sum_repeat },
        Task { id: 31, name: "vec_fill_index", run: collections::vec_fill_index },
        Task { id: 32, name: "small_vec_rescan", run: collections::small_vec_rescan },
        Task { id: 33, name: "format_fixed", run: strings::format_fixed },
        Task { id: 34, name: "hashset_hit_loop", run: maps::hashset_hit_loop },
        Task { id: 35, name: "split_fields", run: strings::split_fields },
        Task { id: 36, name: "binary_heap_top", run: collections::binary_heap_top },
        Task { id: 37, name: "large_object_moves", run: objects::large_object_moves },
        Task { id: 38, name: "btreemap_strings", run: maps::btreemap_strings },
        Task { id: 39, name: "indexed_sum", run: collections::indexed_sum },
        Task { id: 40, name: "bit_shuffle", run: numeric::bit_shuffle },
        Task { id: 41, name: "enum_color_name", run: objects::enum_color_name },
        Task { id: 42, name: "string_purge", run: strings::string_purge },
        Task { id: 43, name: "vec_double_sum", run: collections::vec_double_sum },
        Task { id: 44, name: "matrix_sum", run: collections::matrix_sum },
        Task { id: 45, name: "boxed_transform", run: objects::boxed_transform },
        Task { id: 46, name: "deque_push_front", run: collections::deque_push_front },
        Task { id: 47, name: "linear_search", run: collections::linear_search },
        Task { id: 48, name: "regex_emails", run: patterns::regex_emails },
        Task { id: 49, name: "vec_push_sum", run: collections::vec_push_sum },
        Task { id: 50, name: "fib_recursive", run: patterns::fib_recursive },
    ]
}
