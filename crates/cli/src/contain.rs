//! Failure containment around example execution.
//!
//! Examples declare no error contract; the only way one can fail is by
//! panicking. The panic is caught here so a broken snippet reports one
//! line and hands control back to the caller instead of taking the
//! whole process down.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use playground_core::Example;

/// Runs an example, converting a panic into an error message.
pub fn run_contained(example: &dyn Example) -> Result<(), String> {
    // Silence the default hook for the duration so the caller's one-line
    // report is the only thing the user sees.
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| example.run()));
    panic::set_hook(previous);

    outcome.map_err(|payload| payload_message(payload.as_ref()))
}

fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_core::Topic;

    struct Healthy;

    impl Example for Healthy {
        fn name(&self) -> &str {
            "healthy"
        }

        fn topic(&self) -> Topic {
            Topic::Collections
        }

        fn run(&self) {}
    }

    struct Broken;

    impl Example for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn topic(&self) -> Topic {
            Topic::Query
        }

        fn run(&self) {
            panic!("boom");
        }
    }

    #[test]
    fn test_healthy_example_passes_through() {
        assert!(run_contained(&Healthy).is_ok());
    }

    #[test]
    fn test_panic_is_contained_with_message() {
        let reason = run_contained(&Broken).unwrap_err();
        assert_eq!(reason, "boom");
    }
}
