//! Direct execution of a single example by name, outside the menu.

use playground_core::error::PlaygroundError;
use playground_core::{ExampleRegistry, Result};
use tracing::info;

use crate::contain::run_contained;

pub fn run(registry: &ExampleRegistry, name: &str) -> Result<()> {
    let example = registry
        .find(name)
        .ok_or_else(|| PlaygroundError::UnknownExample(name.to_string()))?;

    info!("running example '{}'", example.name());

    run_contained(example).map_err(|reason| PlaygroundError::ExampleFailed {
        name: example.name().to_string(),
        reason,
    })
}
