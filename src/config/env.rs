// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use tracing::Level;

pub const ENV_HTTP_PORT: &str = "APPIUM_GESTURES_HTTP_PORT";
pub const ENV_BIND: &str = "APPIUM_GESTURES_BIND";
pub const ENV_LOG: &str = "APPIUM_GESTURES_LOG";
pub const ENV_STATELESS: &str = "APPIUM_GESTURES_HTTP_STATELESS";

/// Configuration validation result
#[derive(Debug, Default)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConfigValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Format as a human-readable report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for err in &self.errors {
                lines.push(format!("  - {}", err));
            }
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warn in &self.warnings {
                lines.push(format!("  - {}", warn));
            }
        }

        if lines.is_empty() {
            "Configuration OK".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Environment configuration - all env vars in one place
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// HTTP transport port (APPIUM_GESTURES_HTTP_PORT)
    pub http_port: Option<u16>,
    /// HTTP bind address (APPIUM_GESTURES_BIND)
    pub bind: Option<String>,
    /// Log level override (APPIUM_GESTURES_LOG)
    pub log_level: Option<Level>,
    /// Run the HTTP transport without sessions (APPIUM_GESTURES_HTTP_STATELESS)
    pub http_stateless: Option<bool>,
    /// Values that were set but could not be parsed
    pub(crate) rejected: Vec<String>,
}

impl EnvConfig {
    /// Load all environment configuration (call once at startup, after .env files)
    pub fn load() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut rejected = Vec::new();

        let http_port = read(ENV_HTTP_PORT).and_then(|raw| match raw.parse::<u16>() {
            Ok(port) => Some(port),
            Err(_) => {
                rejected.push(format!("{ENV_HTTP_PORT}={raw} is not a valid port, ignoring"));
                None
            }
        });

        let log_level = read(ENV_LOG).and_then(|raw| match parse_level(&raw) {
            Some(level) => Some(level),
            None => {
                rejected.push(format!("{ENV_LOG}={raw} is not a log level, ignoring"));
                None
            }
        });

        let http_stateless = read(ENV_STATELESS).and_then(|raw| match parse_bool(&raw) {
            Some(b) => Some(b),
            None => {
                rejected.push(format!("{ENV_STATELESS}={raw} is not a boolean, ignoring"));
                None
            }
        });

        Self {
            http_port,
            bind: read(ENV_BIND),
            log_level,
            http_stateless,
            rejected,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();
        for msg in &self.rejected {
            validation.add_warning(msg.clone());
        }
        if let Some(bind) = self.bind.as_deref().filter(|b| b.contains("://")) {
            validation.add_error(format!("{ENV_BIND}={bind} must be a host address, not a URL"));
        }
        if self.http_port == Some(0) {
            validation.add_warning(format!("{ENV_HTTP_PORT}=0 binds an ephemeral port"));
        }
        validation
    }
}

/// Parse a tracing level name (case-insensitive)
pub fn parse_level(s: &str) -> Option<Level> {
    s.trim().parse().ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
