//! The interactive selection loop.
//!
//! A small state machine over blocking reads: topic menu, example menu
//! within a chosen topic, run the chosen example, back to the topic
//! menu. `0` at the topic menu (or Ctrl-C / Ctrl-D anywhere) exits.

mod prompt;
mod view;

use playground_core::{Example, ExampleRegistry, Result, Topic, group_by_topic};
use reedline::{Reedline, Signal};
use tracing::{debug, info};

use self::prompt::MenuPrompt;
use crate::contain::run_contained;

/// Outcome of parsing one line of menu input.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Exit,
    Index(usize),
    Invalid,
}

/// Parses a 1-based selection against `count` entries.
///
/// `0` maps to [`Choice::Exit`]; anything non-numeric, negative, or out
/// of range is [`Choice::Invalid`]. Invalid input is expected
/// interactive noise, not an error.
fn parse_choice(input: &str, count: usize) -> Choice {
    match input.trim().parse::<usize>() {
        Ok(0) => Choice::Exit,
        Ok(n) if n <= count => Choice::Index(n - 1),
        _ => Choice::Invalid,
    }
}

pub struct MenuShell<'a> {
    registry: &'a ExampleRegistry,
}

impl<'a> MenuShell<'a> {
    pub fn new(registry: &'a ExampleRegistry) -> Self {
        Self { registry }
    }

    pub fn run(&self) -> Result<()> {
        let mut line_editor = Reedline::create();
        info!("menu started with {} examples", self.registry.len());

        loop {
            // The catalog is static and small, so the grouping is
            // recomputed per iteration instead of cached across the
            // borrow of the editor.
            let grouped = group_by_topic(self.registry.iter());
            let topics: Vec<Topic> = grouped.keys().copied().collect();

            let _ = line_editor.clear_screen();
            println!("{}", view::topic_menu(&topics));

            let Some(input) = self.read_line(&mut line_editor, MenuPrompt::choice())? else {
                break;
            };

            let topic = match parse_choice(&input, topics.len()) {
                Choice::Exit => break,
                Choice::Index(i) => topics[i],
                Choice::Invalid => {
                    println!("{}", view::invalid_topic_line());
                    if self.acknowledge(&mut line_editor)?.is_none() {
                        break;
                    }
                    continue;
                }
            };

            debug!("topic selected: {topic}");
            let examples = &grouped[&topic];

            let _ = line_editor.clear_screen();
            println!("{}", view::example_menu(topic, examples));

            let Some(input) = self.read_line(&mut line_editor, MenuPrompt::choice())? else {
                break;
            };

            // Any miss here (including `0`) falls back to the topic
            // menu rather than re-prompting for an example.
            let example: &dyn Example = match parse_choice(&input, examples.len()) {
                Choice::Index(i) => examples[i],
                Choice::Exit | Choice::Invalid => {
                    println!("{}", view::invalid_example_line());
                    if self.acknowledge(&mut line_editor)?.is_none() {
                        break;
                    }
                    continue;
                }
            };

            let _ = line_editor.clear_screen();
            info!("running example '{}'", example.name());
            if let Err(reason) = run_contained(example) {
                println!("{}", view::failure_line(example.name(), &reason));
            }

            println!("\nPress any key to continue...");
            if self.acknowledge(&mut line_editor)?.is_none() {
                break;
            }
        }

        println!("Bye!");
        Ok(())
    }

    /// One blocking read. `None` means the user hit Ctrl-C or Ctrl-D
    /// and the loop should wind down.
    fn read_line(&self, editor: &mut Reedline, prompt: MenuPrompt) -> Result<Option<String>> {
        match editor.read_line(&prompt)? {
            Signal::Success(buffer) => Ok(Some(buffer)),
            Signal::CtrlC | Signal::CtrlD => Ok(None),
        }
    }

    /// Blocks until the user acknowledges with a keypress (ended by
    /// Enter; there is no raw-mode read in this stack).
    fn acknowledge(&self, editor: &mut Reedline) -> Result<Option<()>> {
        Ok(self.read_line(editor, MenuPrompt::ack())?.map(|_| ()))
    }
}

pub fn run(registry: &ExampleRegistry) -> Result<()> {
    MenuShell::new(registry).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_zero_exits_at_topic_menu() {
        assert_eq!(parse_choice("0", 2), Choice::Exit);
    }

    #[test]
    fn test_in_range_choices() {
        assert_eq!(parse_choice("1", 2), Choice::Index(0));
        assert_eq!(parse_choice(" 2 ", 2), Choice::Index(1));
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        assert_eq!(parse_choice("5", 2), Choice::Invalid);
        assert_eq!(parse_choice("3", 2), Choice::Invalid);
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert_eq!(parse_choice("", 2), Choice::Invalid);
        assert_eq!(parse_choice("abc", 2), Choice::Invalid);
        assert_eq!(parse_choice("-1", 2), Choice::Invalid);
        assert_eq!(parse_choice("1.5", 2), Choice::Invalid);
    }

    struct Counting {
        name: &'static str,
        topic: Topic,
        calls: AtomicUsize,
    }

    impl Example for Counting {
        fn name(&self) -> &str {
            self.name
        }

        fn topic(&self) -> Topic {
            self.topic
        }

        fn run(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    // Valid topic then valid example: the selected example runs exactly
    // once, resolved through the same grouping and parsing the shell
    // uses.
    #[test]
    fn test_selection_path_runs_example_once() {
        let first = Counting {
            name: "first",
            topic: Topic::Collections,
            calls: AtomicUsize::new(0),
        };
        let second = Counting {
            name: "second",
            topic: Topic::Query,
            calls: AtomicUsize::new(0),
        };

        let examples: Vec<&dyn Example> = vec![&first, &second];
        let grouped = group_by_topic(examples.into_iter());
        let topics: Vec<Topic> = grouped.keys().copied().collect();

        let Choice::Index(t) = parse_choice("2", topics.len()) else {
            panic!("expected a topic index");
        };
        let group = &grouped[&topics[t]];
        let Choice::Index(e) = parse_choice("1", group.len()) else {
            panic!("expected an example index");
        };

        assert!(run_contained(group[e]).is_ok());
        assert_eq!(second.calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.calls.load(Ordering::SeqCst), 0);
    }
}
