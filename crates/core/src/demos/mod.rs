//! Built-in demonstration snippets.
//!
//! Leaf content only: each snippet is a unit struct with a short,
//! deterministic `run` body. Registering a new snippet means adding it
//! to [`all`]; the menu and grouping pick it up from there.

mod collections;
mod query;

pub use collections::{HashMapEntryExample, VecPushExample};
pub use query::{
    AllExample, AnyExample, ContainsExample, FilterVariantExample, FlatMapExample, MapExample,
    MapSquaresExample,
};

use crate::model::Example;

/// The full demo catalog, in menu order.
pub fn all() -> Vec<Box<dyn Example>> {
    vec![
        Box::new(VecPushExample),
        Box::new(HashMapEntryExample),
        Box::new(MapExample),
        Box::new(MapSquaresExample),
        Box::new(FlatMapExample),
        Box::new(FilterVariantExample),
        Box::new(AnyExample),
        Box::new(AllExample),
        Box::new(ContainsExample),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_snippets_run_without_panicking() {
        for example in all() {
            example.run();
        }
    }
}
