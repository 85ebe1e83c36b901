//! Ownership, dispatch and object-graph tasks: shared pointers, trait
//! objects, boxed closures and struct collections.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::SuiteConfig;
use crate::error::Result;

fn use_shared(p: Rc<Cell<i64>>, counter: &mut i64) {
    *counter += if p.get() % 2 != 0 { 1 } else { -1 };
}

/// Task 6: hand a shared pointer by value to a helper one million times.
/// Each call bumps and drops the reference count; parity contributions
/// cancel to zero.
pub fn shared_parity(_config: &SuiteConfig) -> Result<String> {
    let ptr = Rc::new(Cell::new(0i64));
    let mut counter = 0i64;
    for i in 0..1_000_000 {
        ptr.set(i);
        use_shared(Rc::clone(&ptr), &mut counter);
    }
    Ok(format!("{counter}"))
}

/// Task 7: collect 1000 name/age records built from a shared prefix.
pub fn struct_collect(_config: &SuiteConfig) -> Result<String> {
    #[allow(dead_code)]
    struct Person {
        name: String,
        age: i32,
    }

    let mut people = Vec::new();
    let name = "John";
    for i in 0..1000 {
        people.push(Person {
            name: format!("{name}{i}"),
            age: i,
        });
    }
    Ok(format!("People: {}", people.len()))
}

/// Runtime polymorphism over "compute a value from an index".
trait ValueSource {
    fn value(&self, i: i64) -> i64;
}

struct Parity;

impl ValueSource for Parity {
    fn value(&self, i: i64) -> i64 {
        i % 2
    }
}

/// Task 26: ten million virtual calls through a boxed trait object.
pub fn dyn_dispatch(_config: &SuiteConfig) -> Result<String> {
    let source: Box<dyn ValueSource> = Box::new(Parity);
    let mut sum = 0i64;
    for i in 0..10_000_000 {
        sum += source.value(i);
    }
    Ok(format!("{sum}"))
}

/// Task 27: accumulate 10 000 values behind a struct API, then sum them.
pub fn accumulator_struct(_config: &SuiteConfig) -> Result<String> {
    #[derive(Default)]
    struct Accumulator {
        data: Vec<i64>,
    }

    impl Accumulator {
        fn add(&mut self, value: i64) {
            self.data.push(value);
        }

        fn sum(&self) -> i64 {
            let mut total = 0;
            for val in &self.data {
                total += val;
            }
            total
        }
    }

    let mut processor = Accumulator::default();
    for i in 0..10_000 {
        processor.add(i);
    }
    Ok(format!("Sum: {}", processor.sum()))
}

/// Task 28: build 10 000 owned name strings and report the first.
pub fn first_person(_config: &SuiteConfig) -> Result<String> {
    struct Person {
        name: String,
    }

    let mut people = Vec::new();
    for i in 0..10_000 {
        people.push(Person {
            name: format!("Person{i}"),
        });
    }
    let first = people.first().map(|p| p.name.as_str()).unwrap_or_default();
    Ok(format!("First person: {first}"))
}

/// Task 37: move a 10 000-element object out of a constructor 100 times and
/// sum its payload each time.
pub fn large_object_moves(_config: &SuiteConfig) -> Result<String> {
    struct LargeObject {
        data: Vec<i64>,
    }

    fn create_object() -> LargeObject {
        LargeObject {
            data: vec![42; 10_000],
        }
    }

    let mut sum = 0i64;
    for _ in 0..100 {
        let obj = create_object();
        for val in &obj.data {
            sum += val;
        }
    }
    Ok(format!("Sum: {sum}"))
}

/// Task 41: map an enum discriminant to its display name through a fixed
/// table.
pub fn enum_color_name(_config: &SuiteConfig) -> Result<String> {
    #[allow(dead_code)]
    #[derive(Clone, Copy)]
    enum Color {
        Red,
        Green,
        Blue,
        Yellow,
        Purple,
    }

    const COLOR_NAMES: [&str; 5] = ["Red", "Green", "Blue", "Yellow", "Purple"];

    let c = Color::Blue;
    Ok(format!("Color name: {}", COLOR_NAMES[c as usize]))
}

fn transform(x: i32) -> i32 {
    x * x + 1
}

/// Task 45: apply a boxed function value across ten million elements.
pub fn boxed_transform(_config: &SuiteConfig) -> Result<String> {
    const SIZE: usize = 10_000_000;
    let numbers = vec![5i32; SIZE];
    let mut results = vec![0i32; SIZE];

    let func: Box<dyn Fn(i32) -> i32> = Box::new(transform);
    for i in 0..SIZE {
        results[i] = func(numbers[i]);
    }
    Ok(format!("Result sample: {}", results[1000]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuiteConfig;

    fn config() -> SuiteConfig {
        SuiteConfig::with_seed(0)
    }

    #[test]
    fn parity_contributions_cancel() {
        assert_eq!(shared_parity(&config()).unwrap(), "0");
    }

    #[test]
    fn one_thousand_people_collected() {
        assert_eq!(struct_collect(&config()).unwrap(), "People: 1000");
    }

    #[test]
    fn virtual_calls_count_odd_indices() {
        assert_eq!(dyn_dispatch(&config()).unwrap(), "5000000");
    }

    #[test]
    fn accumulator_sums_arithmetic_series() {
        assert_eq!(accumulator_struct(&config()).unwrap(), "Sum: 49995000");
    }

    #[test]
    fn first_generated_name_survives() {
        assert_eq!(first_person(&config()).unwrap(), "First person: Person0");
    }

    #[test]
    fn moved_objects_sum_their_payload() {
        assert_eq!(large_object_moves(&config()).unwrap(), "Sum: 42000000");
    }

    #[test]
    fn blue_resolves_through_the_table() {
        assert_eq!(enum_color_name(&config()).unwrap(), "Color name: Blue");
    }
}
