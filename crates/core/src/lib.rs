pub mod demos;
pub mod error;
pub mod grouping;
pub mod logging;
pub mod model;
pub mod registry;

pub use error::Result;
pub use grouping::group_by_topic;
pub use model::{Example, Topic};
pub use registry::ExampleRegistry;
