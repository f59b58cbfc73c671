use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level for every target (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit newline-delimited JSON instead of the human readable format
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Directive string handed to `tracing_subscriber::EnvFilter`.
    ///
    /// `RUST_LOG` still wins when it is set; this is only the fallback.
    pub fn filter_directive(&self) -> String {
        let level = self.level.trim().to_lowercase();
        if level.is_empty() {
            default_log_level()
        } else {
            level
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
