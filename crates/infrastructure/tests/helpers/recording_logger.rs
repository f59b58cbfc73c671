#![allow(dead_code)]
use dns_transport_infrastructure::dns::{ContextLogger, LogField, TransportLogger};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn handle(self: &Arc<Self>) -> TransportLogger {
        TransportLogger::new(self.clone())
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl ContextLogger for RecordingLogger {
    fn log(&self, _ctx: &CancellationToken, level: Level, message: &str, fields: &[LogField<'_>]) {
        self.entries.lock().unwrap().push(LogEntry {
            level,
            message: message.to_string(),
            fields: fields
                .iter()
                .map(|f| (f.key.to_string(), f.value.to_string()))
                .collect(),
        });
    }
}
