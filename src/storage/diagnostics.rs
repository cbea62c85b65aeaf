use serde::Serialize;
use std::sync::Mutex;

/// A storage failure that was absorbed instead of returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreDiagnostic {
    ReadFailed { key: String, reason: String },
    ParseFailed { key: String, reason: String },
    SerializeFailed { key: String, reason: String },
    WriteFailed { key: String, reason: String },
    RemoveFailed { key: String, reason: String },
}

impl StoreDiagnostic {
    pub fn key(&self) -> &str {
        match self {
            StoreDiagnostic::ReadFailed { key, .. }
            | StoreDiagnostic::ParseFailed { key, .. }
            | StoreDiagnostic::SerializeFailed { key, .. }
            | StoreDiagnostic::WriteFailed { key, .. }
            | StoreDiagnostic::RemoveFailed { key, .. } => key,
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            StoreDiagnostic::ReadFailed { reason, .. }
            | StoreDiagnostic::ParseFailed { reason, .. }
            | StoreDiagnostic::SerializeFailed { reason, .. }
            | StoreDiagnostic::WriteFailed { reason, .. }
            | StoreDiagnostic::RemoveFailed { reason, .. } => reason,
        }
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            StoreDiagnostic::ReadFailed { .. } => "read_failed",
            StoreDiagnostic::ParseFailed { .. } => "parse_failed",
            StoreDiagnostic::SerializeFailed { .. } => "serialize_failed",
            StoreDiagnostic::WriteFailed { .. } => "write_failed",
            StoreDiagnostic::RemoveFailed { .. } => "remove_failed",
        }
    }
}

/// Receiver for absorbed storage failures
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: StoreDiagnostic);
}

/// Sink that keeps every diagnostic in memory
#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<StoreDiagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the diagnostics recorded so far
    pub fn take(&self) -> Vec<StoreDiagnostic> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, diagnostic: StoreDiagnostic) {
        if let Ok(mut events) = self.events.lock() {
            events.push(diagnostic);
        }
    }
}
