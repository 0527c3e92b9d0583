use crate::record::SlowlogRecord;

/// Multiplier from the user-facing threshold to the microsecond durations
/// found in the log.
pub const DURATION_SCALE: f64 = 1000.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    /// Records must be strictly slower than `duration_threshold * DURATION_SCALE`
    /// microseconds.
    pub duration_threshold: f64,
    /// Exact, case-sensitive command name. `None` or empty matches everything.
    pub command: Option<String>,
}

impl RecordFilter {
    pub fn new(duration_threshold: f64, command: Option<String>) -> Self {
        Self {
            duration_threshold,
            command: command.filter(|c| !c.is_empty()),
        }
    }

    pub fn min_duration_micros(&self) -> f64 {
        self.duration_threshold * DURATION_SCALE
    }

    pub fn matches(&self, record: &SlowlogRecord) -> bool {
        // NaN durations never pass
        let slow_enough = record.duration_micros > self.min_duration_micros();
        if !slow_enough {
            return false;
        }

        match self.command.as_deref() {
            Some(command) if !command.is_empty() => record.command == command,
            _ => true,
        }
    }

    pub fn apply(&self, records: Vec<SlowlogRecord>) -> Vec<SlowlogRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
