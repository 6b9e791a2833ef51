use serde::Serialize;
use std::fmt;

/// Category label used to group examples in the menu.
///
/// The set is closed and defined at compile time; menus derive their
/// entries from the grouping, not from this list, so topics with no
/// registered examples never show up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Topic {
    Collections,
    Query,
}

impl Topic {
    pub const ALL: &'static [Topic] = &[Topic::Collections, Topic::Query];
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Collections => write!(f, "Collections"),
            Topic::Query => write!(f, "Query"),
        }
    }
}

/// A named, runnable demonstration snippet tagged with a topic.
///
/// Implementers are flat unit structs, one per snippet. `run` writes to
/// stdout and declares no error contract; failure containment is the
/// caller's concern.
pub trait Example {
    fn name(&self) -> &str;
    fn topic(&self) -> Topic;
    fn run(&self);
}
