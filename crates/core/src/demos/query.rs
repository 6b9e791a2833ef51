//! Query-style iterator snippets: projections, flattening, quantifiers.

use crate::model::{Example, Topic};

/// Doubling every element with `map`.
pub struct MapExample;

impl Example for MapExample {
    fn name(&self) -> &str {
        "Iterator map"
    }

    fn topic(&self) -> Topic {
        Topic::Query
    }

    fn run(&self) {
        let numbers = [1, 2, 3, 4];

        for doubled in numbers.iter().map(|x| x * 2) {
            println!("{doubled}");
        }
    }
}

/// Projecting elements to their squares.
pub struct MapSquaresExample;

impl Example for MapSquaresExample {
    fn name(&self) -> &str {
        "Map squares"
    }

    fn topic(&self) -> Topic {
        Topic::Query
    }

    fn run(&self) {
        let numbers = [1, 2, 3, 4];
        let squares: Vec<i32> = numbers.iter().map(|x| x * x).collect();

        for square in squares {
            println!("{square}");
        }
    }
}

/// Flattening nested collections with `flat_map`.
pub struct FlatMapExample;

impl Example for FlatMapExample {
    fn name(&self) -> &str {
        "Flat map"
    }

    fn topic(&self) -> Topic {
        Topic::Query
    }

    fn run(&self) {
        let nested = vec![vec![1, 2], vec![3, 4], vec![5]];
        let flat: Vec<i32> = nested.into_iter().flatten().collect();

        for n in flat {
            println!("{n}");
        }
    }
}

/// Extracting one variant from a mixed list with `filter_map`.
pub struct FilterVariantExample;

impl Example for FilterVariantExample {
    fn name(&self) -> &str {
        "Filter by variant"
    }

    fn topic(&self) -> Topic {
        Topic::Query
    }

    fn run(&self) {
        enum Value {
            Int(i32),
            Text(&'static str),
        }

        let items = [
            Value::Int(1),
            Value::Text("hello"),
            Value::Int(2),
            Value::Text("world"),
            Value::Int(3),
        ];

        let ints: Vec<i32> = items
            .iter()
            .filter_map(|item| match item {
                Value::Int(n) => Some(*n),
                Value::Text(_) => None,
            })
            .collect();

        for n in ints {
            println!("{n}");
        }
    }
}

/// Existential quantifier: `any`.
pub struct AnyExample;

impl Example for AnyExample {
    fn name(&self) -> &str {
        "Quantifier any"
    }

    fn topic(&self) -> Topic {
        Topic::Query
    }

    fn run(&self) {
        let numbers = [1, 3, 5, 7, 4, 6];
        let has_even = numbers.iter().any(|x| x % 2 == 0);

        println!("has even: {has_even}");
    }
}

/// Universal quantifier: `all`.
pub struct AllExample;

impl Example for AllExample {
    fn name(&self) -> &str {
        "Quantifier all"
    }

    fn topic(&self) -> Topic {
        Topic::Query
    }

    fn run(&self) {
        let numbers = [2, 4, 6, 8];
        let all_even = numbers.iter().all(|x| x % 2 == 0);

        println!("all even: {all_even}");
    }
}

/// Membership test with `contains`.
pub struct ContainsExample;

impl Example for ContainsExample {
    fn name(&self) -> &str {
        "Contains"
    }

    fn topic(&self) -> Topic {
        Topic::Query
    }

    fn run(&self) {
        let numbers = [10, 20, 30, 40];
        let has_twenty = numbers.contains(&20);

        println!("contains 20: {has_twenty}");
    }
}
