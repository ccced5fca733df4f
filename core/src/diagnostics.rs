//! Leveled events emitted while extracting tokens.
//!
//! Extractors never log directly; they report to a [`Diagnostics`] sink
//! handed to them by the caller.

use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Success,
    Error,
    Warning,
    Info,
    Debug,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Success => "success",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
        };
        f.write_str(label)
    }
}

/// Receiver of extraction diagnostics. Shared between extraction tasks, so
/// implementations must be thread-safe.
pub trait Diagnostics: Send + Sync {
    fn emit(&self, level: Level, message: String);

    fn success(&self, message: String) {
        self.emit(Level::Success, message)
    }
    fn error(&self, message: String) {
        self.emit(Level::Error, message)
    }
    fn warning(&self, message: String) {
        self.emit(Level::Warning, message)
    }
    fn info(&self, message: String) {
        self.emit(Level::Info, message)
    }
    fn debug(&self, message: String) {
        self.emit(Level::Debug, message)
    }
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn emit(&self, level: Level, message: String) {
        match level {
            Level::Success => log::info!(target: "success", "{message}"),
            Level::Error => log::error!("{message}"),
            Level::Warning => log::warn!("{message}"),
            Level::Info => log::info!("{message}"),
            Level::Debug => log::debug!("{message}"),
        }
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn emit(&self, _level: Level, _message: String) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

/// Keeps every event in memory, in the order it was emitted.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    events: Mutex<Vec<Diagnostic>>,
}
impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn events(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
    /// Messages emitted at `level`.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|event| event.level == level)
            .map(|event| event.message)
            .collect()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn emit(&self, level: Level, message: String) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(Diagnostic { level, message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_keeps_order_and_level() {
        let diagnostics = CollectingDiagnostics::new();
        diagnostics.info("start".to_string());
        diagnostics.error("broken".to_string());
        diagnostics.success("done".to_string());

        let events = diagnostics.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].level, Level::Error);
        assert_eq!(diagnostics.messages(Level::Info), ["start"]);
        assert_eq!(diagnostics.messages(Level::Warning), Vec::<String>::new());
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Warning.to_string(), "warning");
    }
}
