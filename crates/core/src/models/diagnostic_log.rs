use std::collections::VecDeque;

use chrono::{DateTime, SecondsFormat, Utc};

pub const DIAGNOSTIC_LOG_CAPACITY: usize = 50;

/// The last [`DIAGNOSTIC_LOG_CAPACITY`] timestamped messages of a spammer.
/// Every entry is forwarded to the `log` facade as well.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::with_capacity(DIAGNOSTIC_LOG_CAPACITY)
    }
}

impl DiagnosticLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, level: log::Level, message: impl AsRef<str>) {
        self.record_at(Utc::now(), level, message)
    }

    pub(crate) fn record_at(&mut self, at: DateTime<Utc>, level: log::Level, message: impl AsRef<str>) {
        let message = message.as_ref();
        log::log!(level, "{message}");
        let timestamp = at.to_rfc3339_opts(SecondsFormat::Millis, true);
        self.entries.push_back(format!("[{timestamp}] {message}"));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
