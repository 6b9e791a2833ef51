//! Order-preserving partition of examples by topic.

use indexmap::IndexMap;

use crate::model::{Example, Topic};

/// Groups examples by topic in a single pass.
///
/// Keys appear in first-seen order and each group keeps the relative
/// order of the input sequence, so the result is deterministic for a
/// fixed registry. An empty input yields an empty map.
pub fn group_by_topic<'a, I>(examples: I) -> IndexMap<Topic, Vec<&'a dyn Example>>
where
    I: IntoIterator<Item = &'a dyn Example>,
{
    let mut grouped: IndexMap<Topic, Vec<&'a dyn Example>> = IndexMap::new();
    for example in examples {
        grouped.entry(example.topic()).or_default().push(example);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ExampleRegistry;

    struct Stub {
        name: &'static str,
        topic: Topic,
    }

    impl Example for Stub {
        fn name(&self) -> &str {
            self.name
        }

        fn topic(&self) -> Topic {
            self.topic
        }

        fn run(&self) {}
    }

    fn registry_abc() -> ExampleRegistry {
        ExampleRegistry::new(vec![
            Box::new(Stub {
                name: "A",
                topic: Topic::Collections,
            }),
            Box::new(Stub {
                name: "B",
                topic: Topic::Query,
            }),
            Box::new(Stub {
                name: "C",
                topic: Topic::Collections,
            }),
        ])
        .unwrap()
    }

    fn names(group: &[&dyn Example]) -> Vec<String> {
        group.iter().map(|e| e.name().to_string()).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let grouped = group_by_topic(std::iter::empty::<&dyn Example>());
        assert!(grouped.is_empty());
    }

    #[test]
    fn test_groups_preserve_registry_order() {
        let registry = registry_abc();
        let grouped = group_by_topic(registry.iter());

        assert_eq!(grouped.len(), 2);
        assert_eq!(names(&grouped[&Topic::Collections]), ["A", "C"]);
        assert_eq!(names(&grouped[&Topic::Query]), ["B"]);

        // Key order follows first appearance in the registry.
        let keys: Vec<Topic> = grouped.keys().copied().collect();
        assert_eq!(keys, [Topic::Collections, Topic::Query]);
    }

    #[test]
    fn test_grouping_partitions_input_exactly() {
        let registry = registry_abc();
        let grouped = group_by_topic(registry.iter());

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, registry.len());

        for (topic, group) in &grouped {
            for example in group {
                assert_eq!(example.topic(), *topic);
            }
        }
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let registry = registry_abc();
        let first = group_by_topic(registry.iter());
        let second = group_by_topic(registry.iter());

        fn flatten(m: &IndexMap<Topic, Vec<&dyn Example>>) -> Vec<(Topic, Vec<String>)> {
            m.iter()
                .map(|(t, g)| (*t, g.iter().map(|e| e.name().to_string()).collect()))
                .collect()
        }
        assert_eq!(flatten(&first), flatten(&second));
    }

    #[test]
    fn test_builtin_catalog_grouping() {
        let registry = ExampleRegistry::builtin().unwrap();
        let grouped = group_by_topic(registry.iter());

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, registry.len());

        // The built-in catalog seeds every topic, in declaration order.
        let keys: Vec<Topic> = grouped.keys().copied().collect();
        assert_eq!(keys, Topic::ALL);
    }
}
