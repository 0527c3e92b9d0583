use super::SlowlogRecord;
use chrono::{Local, TimeZone};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl SlowlogRecord {
    /// Renders the record as a single line with the date in `tz`.
    ///
    /// Parameters are left out. A timestamp outside chrono's range is
    /// printed as the raw integer.
    pub fn render_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let date = match tz.timestamp_opt(self.timestamp, 0).earliest() {
            Some(dt) => dt.format(DATE_FORMAT).to_string(),
            None => self.timestamp.to_string(),
        };

        let mut out = format!(
            "date: {date}, slowID: {}, duration: {:.2}ms, command: {}",
            self.id,
            self.duration_millis(),
            self.command
        );

        if let Some(key) = self.key() {
            out.push_str(&format!(", key: {key}"));
        }

        out
    }
}

impl fmt::Display for SlowlogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_in(&Local))
    }
}
