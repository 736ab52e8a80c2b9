use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            analysis: AnalysisConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Tuning knobs for normalization and scoring. The defaults reproduce the
/// reference scoring output exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub vague_min_words: usize,
    pub short_text_words: usize,
    pub detailed_text_words: usize,
    pub preview_rows: usize,
    pub resources: ResourceConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            vague_min_words: 5,
            short_text_words: 5,
            detailed_text_words: 10,
            preview_rows: 20,
            resources: ResourceConfig::default(),
        }
    }
}

impl AnalysisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let vague_min_words = parse_count("APP_VAGUE_MIN_WORDS", defaults.vague_min_words)?;
        let short_text_words = parse_count("APP_SCORE_SHORT_WORDS", defaults.short_text_words)?;
        let detailed_text_words =
            parse_count("APP_SCORE_DETAILED_WORDS", defaults.detailed_text_words)?;
        let preview_rows = parse_count("APP_PREVIEW_ROWS", defaults.preview_rows)?;

        if short_text_words == 0 || detailed_text_words <= short_text_words {
            return Err(ConfigError::InvalidThresholds {
                short: short_text_words,
                detailed: detailed_text_words,
            });
        }

        Ok(Self {
            vague_min_words,
            short_text_words,
            detailed_text_words,
            preview_rows,
            resources: ResourceConfig {
                stopwords_path: optional_path("APP_STOPWORDS_PATH"),
                lexicon_path: optional_path("APP_LEXICON_PATH"),
                vague_phrases_path: optional_path("APP_VAGUE_PHRASES_PATH"),
            },
        })
    }
}

/// Optional overrides for the bundled linguistic resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceConfig {
    pub stopwords_path: Option<PathBuf>,
    pub lexicon_path: Option<PathBuf>,
    pub vague_phrases_path: Option<PathBuf>,
}

fn parse_count(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    InvalidThresholds { short: usize, detailed: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative integer (got '{value}')")
            }
            ConfigError::InvalidThresholds { short, detailed } => write!(
                f,
                "score thresholds must satisfy 0 < short ({short}) < detailed ({detailed})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InvalidThresholds { .. } => None,
        }
    }
}
