//! Runtime server configuration loaded from environment variables.

use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            data_dir: default_data_dir(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `get` to look up variables.
    ///
    /// `PORTFOLIO_HOST`, `PORTFOLIO_PORT` and `PORTFOLIO_DATA_DIR` are read;
    /// empty or unparsable values fall back to the defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| get(key).unwrap_or_default();

        Self {
            host: {
                let h = g("PORTFOLIO_HOST");
                if h.is_empty() { DEFAULT_HOST.into() } else { h }
            },
            port: parse_u16(&g("PORTFOLIO_PORT"), DEFAULT_PORT),
            data_dir: {
                let d = g("PORTFOLIO_DATA_DIR");
                if d.is_empty() { default_data_dir() } else { PathBuf::from(d) }
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("portfolio.db")
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }
}

/// `~/.portfolio`, or `./.portfolio` when there is no home directory.
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".portfolio")
}

fn parse_u16(s: &str, default: u16) -> u16 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::AppConfig;

    fn from_pairs(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = from_pairs(&[]);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 5000);
        assert!(cfg.data_dir.ends_with(".portfolio"));
    }

    #[test]
    fn environment_overrides_are_applied() {
        let cfg = from_pairs(&[
            ("PORTFOLIO_HOST", "127.0.0.1"),
            ("PORTFOLIO_PORT", "8081"),
            ("PORTFOLIO_DATA_DIR", "/srv/portfolio"),
        ]);
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8081");
        assert_eq!(cfg.db_path(), PathBuf::from("/srv/portfolio/portfolio.db"));
        assert_eq!(cfg.uploads_dir(), PathBuf::from("/srv/portfolio/uploads"));
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let cfg = from_pairs(&[("PORTFOLIO_PORT", "not-a-port")]);
        assert_eq!(cfg.port, 5000);
    }
}
