//! # Diagnostics Service
//!
//! This crate implements structured logging for FrameFit hosts.
//!
//! ## Philosophy
//!
//! - Logging is explicit and structured, not text-based or printf-style
//! - Sinks are injected capabilities; nothing writes to ambient stdout
//! - Entries carry the originating context so multi-guest hosts stay legible

use frame_types::ContextId;
use std::sync::{Arc, Mutex};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

/// A structured log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Originating browsing context (if known)
    pub source: Option<ContextId>,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            source: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the originating context
    pub fn with_source(mut self, source: ContextId) -> Self {
        self.source = Some(source);
        self
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Returns the value of a field, if present
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Destination for log entries
pub trait LogSink {
    /// Records one entry
    fn record(&mut self, entry: LogEntry);
}

/// Sink that discards every entry
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn record(&mut self, _entry: LogEntry) {}
}

/// In-memory sink for tests
#[derive(Debug, Default)]
pub struct MemoryLog {
    pub entries: Vec<LogEntry>,
}

impl LogSink for MemoryLog {
    fn record(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }
}

/// Clonable handle to a shared in-memory log
///
/// Useful when the sink is moved into a service but the test still needs to
/// read what was recorded.
#[derive(Debug, Clone, Default)]
pub struct SharedLog {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl SharedLog {
    /// Creates an empty shared log
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded entries
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Returns how many entries were recorded
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Checks if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogEntry>> {
        // A poisoned log is still a log; recover the inner state.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for SharedLog {
    fn record(&mut self, entry: LogEntry) {
        self.lock().push(entry);
    }
}
