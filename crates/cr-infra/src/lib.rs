pub mod fs;
pub mod memory;
pub mod metrics;
pub mod time;

pub use fs::JsonFileSubmissionStore;
pub use memory::InMemorySubmissionStore;
pub use metrics::{FixedMetricsGenerator, RandomMetricsGenerator};
pub use time::{FixedClock, SystemClock};
