mod fixtures;
pub mod tracing;

pub use fixtures::{fixture, fixtures_dir};
pub use tracing::{CapturedEvent, capture_events};
