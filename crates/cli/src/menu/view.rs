//! Text rendering for the menu screens.

use nu_ansi_term::Color;
use playground_core::{Example, Topic};
use std::fmt::Write;

pub fn topic_menu(topics: &[Topic]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", Color::LightBlue.bold().paint("Select Topic:"));
    for (i, topic) in topics.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, topic);
    }
    out.push_str("0. Exit");
    out
}

pub fn example_menu(topic: Topic, examples: &[&dyn Example]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        Color::LightBlue.bold().paint("Topic:"),
        Color::Yellow.paint(topic.to_string())
    );
    for (i, example) in examples.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, example.name());
    }
    // Trailing newline dropped; the caller prints with println.
    out.pop();
    out
}

pub fn invalid_topic_line() -> &'static str {
    "Invalid topic."
}

pub fn invalid_example_line() -> &'static str {
    "Invalid example."
}

pub fn failure_line(name: &str, reason: &str) -> String {
    Color::Red
        .paint(format!("Example '{name}' failed: {reason}"))
        .to_string()
}
