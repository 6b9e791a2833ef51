//! Non-interactive catalog listing.

use playground_core::{ExampleRegistry, Result, group_by_topic};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled, Serialize)]
struct CatalogRow {
    topic: String,
    name: String,
}

fn catalog_rows(registry: &ExampleRegistry) -> Vec<CatalogRow> {
    group_by_topic(registry.iter())
        .iter()
        .flat_map(|(topic, group)| {
            group.iter().map(move |example| CatalogRow {
                topic: topic.to_string(),
                name: example.name().to_string(),
            })
        })
        .collect()
}

pub fn run(registry: &ExampleRegistry, json: bool) -> Result<()> {
    let rows = catalog_rows(registry);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", Table::new(&rows).with(Style::psql()));
    }
    Ok(())
}
