//! In-app diagnostic channel.
//!
//! Failed requests leave the screen as it was, so the activity log is where
//! they become visible. Entries are kept in a `Signal<ActivityLog>` provided by
//! the app root.

use dioxus::prelude::*;

/// Oldest entries are dropped past this count.
const MAX_ENTRIES: usize = 200;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    /// `METHOD url` of the request that failed.
    pub request: Option<String>,
}

impl LogLevel {
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Success => "ok",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
    pub errors_only: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str) {
        self.record(level, message, None);
    }

    pub fn push_failure(&mut self, message: &str, request: String) {
        self.record(LogLevel::Error, message, Some(request));
    }

    fn record(&mut self, level: LogLevel, message: &str, request: Option<String>) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.to_string(),
            request,
        });
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .count()
    }

    /// Entries to display, newest first.
    pub fn shown(&self) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !self.errors_only || e.level == LogLevel::Error)
            .cloned()
            .collect()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(level, message);
}

/// Record a failed request together with the request it sent.
pub fn log_failure(log: &mut Signal<ActivityLog>, message: &str, request: String) {
    log.write().push_failure(message, request);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (h, m, s) = ((secs / 3600) % 24, (secs / 60) % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}
