// src/config/mod.rs
// Configuration: env vars and config file, merged with CLI flags

pub mod env;
pub mod file;

pub use env::{ConfigValidation, EnvConfig};
pub use file::FileConfig;

use std::path::PathBuf;
use tracing::{Level, warn};

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_HTTP_PATH: &str = "/mcp";

/// Directory holding config.toml and the global .env
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".appium-gestures")
}

/// Load .env files (global first, then project - project overrides)
pub fn load_dotenv() {
    let _ = dotenvy::from_path(config_dir().join(".env"));
    let _ = dotenvy::dotenv();
}

/// Effective settings for the HTTP transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub bind: String,
    pub port: u16,
    pub path: String,
    pub stateful: bool,
}

impl HttpSettings {
    /// Merge sources: CLI flags > env > config file > defaults
    pub fn resolve(
        cli_bind: Option<&str>,
        cli_port: Option<u16>,
        env: &EnvConfig,
        file: &FileConfig,
    ) -> Self {
        let bind = cli_bind
            .map(String::from)
            .or_else(|| env.bind.clone())
            .or_else(|| file.server.bind.clone())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let port = cli_port
            .or(env.http_port)
            .or(file.server.port)
            .unwrap_or(DEFAULT_HTTP_PORT);

        let path = match file.server.path.as_deref() {
            Some(p) if p.starts_with('/') => p.to_string(),
            Some(p) => {
                warn!(path = p, "Config path must start with '/', using default");
                DEFAULT_HTTP_PATH.to_string()
            }
            None => DEFAULT_HTTP_PATH.to_string(),
        };

        Self {
            bind,
            port,
            path,
            stateful: !env.http_stateless.unwrap_or(false),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Resolve the log level: env override > config file > caller default
pub fn resolve_log_level(env: &EnvConfig, file: &FileConfig, default: Level) -> Level {
    env.log_level
        .or_else(|| file.server.log_level.as_deref().and_then(env::parse_level))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use file::ServerSection;

    fn file_with(server: ServerSection) -> FileConfig {
        FileConfig { server }
    }

    #[test]
    fn defaults_apply_when_nothing_set() {
        let settings = HttpSettings::resolve(None, None, &EnvConfig::default(), &FileConfig::default());
        assert_eq!(settings.bind, "127.0.0.1");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.path, "/mcp");
        assert!(settings.stateful);
        assert_eq!(settings.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let env = EnvConfig {
            http_port: Some(9001),
            bind: Some("0.0.0.0".into()),
            ..Default::default()
        };
        let file = file_with(ServerSection {
            port: Some(9002),
            bind: Some("10.0.0.1".into()),
            ..Default::default()
        });

        let from_env = HttpSettings::resolve(None, None, &env, &file);
        assert_eq!(from_env.port, 9001);
        assert_eq!(from_env.bind, "0.0.0.0");

        let from_cli = HttpSettings::resolve(Some("localhost"), Some(7000), &env, &file);
        assert_eq!(from_cli.port, 7000);
        assert_eq!(from_cli.bind, "localhost");

        let from_file = HttpSettings::resolve(None, None, &EnvConfig::default(), &file);
        assert_eq!(from_file.port, 9002);
        assert_eq!(from_file.bind, "10.0.0.1");
    }

    #[test]
    fn relative_path_falls_back() {
        let file = file_with(ServerSection {
            path: Some("mcp".into()),
            ..Default::default()
        });
        let settings = HttpSettings::resolve(None, None, &EnvConfig::default(), &file);
        assert_eq!(settings.path, "/mcp");
    }

    #[test]
    fn stateless_from_env() {
        let env = EnvConfig {
            http_stateless: Some(true),
            ..Default::default()
        };
        let settings = HttpSettings::resolve(None, None, &env, &FileConfig::default());
        assert!(!settings.stateful);
    }

    #[test]
    fn log_level_precedence() {
        let file = file_with(ServerSection {
            log_level: Some("debug".into()),
            ..Default::default()
        });
        assert_eq!(
            resolve_log_level(&EnvConfig::default(), &file, Level::WARN),
            Level::DEBUG
        );

        let env = EnvConfig {
            log_level: Some(Level::ERROR),
            ..Default::default()
        };
        assert_eq!(resolve_log_level(&env, &file, Level::WARN), Level::ERROR);
        assert_eq!(
            resolve_log_level(&EnvConfig::default(), &FileConfig::default(), Level::INFO),
            Level::INFO
        );
    }
}
