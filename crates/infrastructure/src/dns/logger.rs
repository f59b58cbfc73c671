//! Optional structured logger handed to transports.
//!
//! Transports never talk to `tracing` directly for diagnostics that belong to
//! their owner; they go through [`TransportLogger`], which is either absent or
//! wraps a [`ContextLogger`].

use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::Level;

/// A single structured key/value pair attached to a log call.
#[derive(Clone, Copy)]
pub struct LogField<'a> {
    pub key: &'a str,
    pub value: &'a dyn fmt::Display,
}

impl<'a> LogField<'a> {
    pub fn new(key: &'a str, value: &'a dyn fmt::Display) -> Self {
        Self { key, value }
    }
}

impl fmt::Display for LogField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

pub trait ContextLogger: Send + Sync {
    fn log(&self, ctx: &CancellationToken, level: Level, message: &str, fields: &[LogField<'_>]);

    fn debug(&self, ctx: &CancellationToken, message: &str, fields: &[LogField<'_>]) {
        self.log(ctx, Level::DEBUG, message, fields);
    }

    fn info(&self, ctx: &CancellationToken, message: &str, fields: &[LogField<'_>]) {
        self.log(ctx, Level::INFO, message, fields);
    }

    fn warn(&self, ctx: &CancellationToken, message: &str, fields: &[LogField<'_>]) {
        self.log(ctx, Level::WARN, message, fields);
    }

    fn error(&self, ctx: &CancellationToken, message: &str, fields: &[LogField<'_>]) {
        self.log(ctx, Level::ERROR, message, fields);
    }
}

/// Logger capability of a transport. Every method is a no-op when absent.
#[derive(Clone, Default)]
pub enum TransportLogger {
    #[default]
    Absent,
    Present(Arc<dyn ContextLogger>),
}

impl TransportLogger {
    pub fn new(logger: Arc<dyn ContextLogger>) -> Self {
        Self::Present(logger)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn log(&self, ctx: &CancellationToken, level: Level, message: &str, fields: &[LogField<'_>]) {
        if let Self::Present(logger) = self {
            logger.log(ctx, level, message, fields);
        }
    }

    pub fn debug(&self, ctx: &CancellationToken, message: &str, fields: &[LogField<'_>]) {
        self.log(ctx, Level::DEBUG, message, fields);
    }

    pub fn info(&self, ctx: &CancellationToken, message: &str, fields: &[LogField<'_>]) {
        self.log(ctx, Level::INFO, message, fields);
    }
}

impl fmt::Debug for TransportLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "TransportLogger::Absent"),
            Self::Present(_) => write!(f, "TransportLogger::Present"),
        }
    }
}

/// Forwards transport diagnostics into `tracing`, tagged with the transport name.
pub struct TracingLogger {
    transport: String,
}

impl TracingLogger {
    pub fn new(transport: impl Into<String>) -> Self {
        Self {
            transport: transport.into(),
        }
    }

    pub fn shared(transport: impl Into<String>) -> TransportLogger {
        TransportLogger::new(Arc::new(Self::new(transport)))
    }
}

impl ContextLogger for TracingLogger {
    fn log(&self, ctx: &CancellationToken, level: Level, message: &str, fields: &[LogField<'_>]) {
        let fields = format_fields(fields);
        let cancelled = ctx.is_cancelled();
        let transport = self.transport.as_str();

        if level == Level::ERROR {
            tracing::error!(transport, fields = %fields, ctx_cancelled = cancelled, "{}", message);
        } else if level == Level::WARN {
            tracing::warn!(transport, fields = %fields, ctx_cancelled = cancelled, "{}", message);
        } else if level == Level::INFO {
            tracing::info!(transport, fields = %fields, ctx_cancelled = cancelled, "{}", message);
        } else if level == Level::DEBUG {
            tracing::debug!(transport, fields = %fields, ctx_cancelled = cancelled, "{}", message);
        } else {
            tracing::trace!(transport, fields = %fields, ctx_cancelled = cancelled, "{}", message);
        }
    }
}

fn format_fields(fields: &[LogField<'_>]) -> String {
    fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Capture {
        lines: Mutex<Vec<String>>,
    }

    impl ContextLogger for Capture {
        fn log(&self, _ctx: &CancellationToken, level: Level, message: &str, fields: &[LogField<'_>]) {
            self.lines
                .lock()
                .unwrap()
                .push(format!("{} {} {}", level, message, format_fields(fields)));
        }
    }

    #[test]
    fn test_absent_logger_is_noop() {
        let logger = TransportLogger::default();
        assert!(!logger.is_present());
        logger.info(&CancellationToken::new(), "ignored", &[]);
    }

    #[test]
    fn test_present_logger_receives_fields() {
        let capture = Arc::new(Capture::default());
        let logger = TransportLogger::new(capture.clone());
        let count = 3usize;

        logger.info(
            &CancellationToken::new(),
            "bad question count",
            &[LogField::new("question_count", &count)],
        );

        let lines = capture.lines.lock().unwrap();
        assert_eq!(lines.as_slice(), ["INFO bad question count question_count=3"]);
    }

    #[test]
    fn test_format_fields_joins_pairs() {
        let a = 1;
        let b = "x";
        let fields = [LogField::new("a", &a), LogField::new("b", &b)];
        assert_eq!(format_fields(&fields), "a=1 b=x");
    }
}
