//! The fixed catalog of all examples known to the playground.
//!
//! The registry exclusively owns its examples; the grouping service and
//! the menu only ever hold transient references into it.

use std::collections::HashSet;

use crate::demos;
use crate::error::{PlaygroundError, Result};
use crate::model::Example;

pub struct ExampleRegistry {
    examples: Vec<Box<dyn Example>>,
}

impl std::fmt::Debug for ExampleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExampleRegistry")
            .field(
                "examples",
                &self.examples.iter().map(|e| e.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ExampleRegistry {
    /// Builds a registry from the given examples.
    ///
    /// Every name must be non-empty after trimming and unique
    /// (case-insensitively, since `find` ignores case). Validation
    /// happens here exactly once, at startup; a bad name aborts
    /// construction.
    pub fn new(examples: Vec<Box<dyn Example>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for example in &examples {
            let name = example.name().trim();
            if name.is_empty() {
                return Err(PlaygroundError::InvalidName);
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(PlaygroundError::DuplicateName(name.to_string()));
            }
        }
        Ok(Self { examples })
    }

    /// Assembles the full built-in demo catalog.
    pub fn builtin() -> Result<Self> {
        let registry = Self::new(demos::all())?;
        tracing::debug!("built-in registry holds {} examples", registry.len());
        Ok(registry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Example> {
        self.examples.iter().map(|e| e.as_ref())
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Case-insensitive lookup by name, for direct `run <name>` calls.
    pub fn find(&self, name: &str) -> Option<&dyn Example> {
        let needle = name.trim().to_lowercase();
        self.iter().find(|e| e.name().to_lowercase() == needle)
    }
}
