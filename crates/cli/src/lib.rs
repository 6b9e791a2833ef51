mod contain;
mod exec;
mod list;
mod menu;

use clap::{Parser, Subcommand};
use playground_core::{ExampleRegistry, logging};

#[derive(Parser)]
#[command(
    name = "playground",
    version,
    about = "An interactive catalog of runnable Rust snippets",
    long_about = "Playground keeps a catalog of short, self-contained Rust snippets grouped \
                  by topic. Browse them through the interactive menu, print the catalog, or \
                  run a single snippet directly by name."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse topics and run examples interactively (the default)
    Menu,
    /// Print the example catalog without entering the menu
    List {
        /// Emit the catalog as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run a single example by name
    Run {
        /// Example name (case-insensitive)
        #[arg(value_name = "NAME")]
        name: String,
    },
}

pub fn run() -> playground_core::Result<()> {
    let cli = Cli::parse();

    logging::init_logging();

    // The registry is built once and handed down by reference; name
    // validation failures surface here and abort startup.
    let registry = ExampleRegistry::builtin()?;

    match cli.command {
        None | Some(Commands::Menu) => menu::run(&registry),
        Some(Commands::List { json }) => list::run(&registry, json),
        Some(Commands::Run { name }) => exec::run(&registry, &name),
    }
}
