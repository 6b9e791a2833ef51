//! Collection-operation snippets.

use crate::model::{Example, Topic};

/// Growing a `Vec` and iterating it.
pub struct VecPushExample;

impl Example for VecPushExample {
    fn name(&self) -> &str {
        "Vec push"
    }

    fn topic(&self) -> Topic {
        Topic::Collections
    }

    fn run(&self) {
        let mut items = vec![1, 2, 3];
        items.push(4);

        for item in &items {
            println!("{item}");
        }
    }
}

/// Counting words with the `HashMap` entry API.
pub struct HashMapEntryExample;

impl Example for HashMapEntryExample {
    fn name(&self) -> &str {
        "HashMap entry"
    }

    fn topic(&self) -> Topic {
        Topic::Collections
    }

    fn run(&self) {
        use std::collections::HashMap;

        let words = ["the", "quick", "the", "lazy", "the"];

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for word in words {
            *counts.entry(word).or_default() += 1;
        }

        // Sort for stable output; HashMap iteration order is arbitrary.
        let mut pairs: Vec<_> = counts.into_iter().collect();
        pairs.sort();

        for (word, count) in pairs {
            println!("{word}: {count}");
        }
    }
}
