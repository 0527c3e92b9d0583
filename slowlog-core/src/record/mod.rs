mod render;

use serde::Serialize;

pub use render::DATE_FORMAT;

/// One slow-log entry reconstructed from a block of lines.
///
/// `id`, `timestamp`, `duration_micros` and `command` come from the four
/// header lines of the block and are always set. `key` is empty when the
/// block has no tail lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlowlogRecord {
    pub id: i64,
    pub timestamp: i64,
    pub duration_micros: f64,
    pub command: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    pub parameters: Vec<String>,
}

impl SlowlogRecord {
    pub fn key(&self) -> Option<&str> {
        (!self.key.is_empty()).then_some(self.key.as_str())
    }

    pub fn duration_millis(&self) -> f64 {
        self.duration_micros / 1000.0
    }

    /// Appends a tail line: the first non-empty one becomes the key, the rest
    /// are parameters.
    pub(crate) fn push_argument(&mut self, line: String) {
        if self.key.is_empty() {
            self.key = line;
        } else {
            self.parameters.push(line);
        }
    }
}
