use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
/// Width of the `doc_chunks.embedding` column; the only accepted dimension.
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 1536;
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DOCS_DIR: &str = "docs";

#[derive(Debug)]
pub enum ConfigError {
    MissingVariable(String),
    InvalidValue { variable: String, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVariable(name) => write!(f, "{} not set", name),
            ConfigError::InvalidValue { variable, value } => {
                write!(f, "Invalid value for {}: {:?}", variable, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings shared by the OpenAI-compatible embedding and chat clients.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub embedding_model: String,
    pub embedding_dimension: usize,
    pub chat_model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_pool_size: u32,
    pub openai: OpenAiConfig,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub docs_dir: PathBuf,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingVariable(name.to_string()))
        };
        let optional = |name: &str, default: &str| -> String {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let embedding_dimension: usize = parse_var(
            "EMBEDDING_DIMENSION",
            optional("EMBEDDING_DIMENSION", &DEFAULT_EMBEDDING_DIMENSION.to_string()),
        )?;
        if embedding_dimension != DEFAULT_EMBEDDING_DIMENSION {
            return Err(ConfigError::InvalidValue {
                variable: "EMBEDDING_DIMENSION".to_string(),
                value: embedding_dimension.to_string(),
            });
        }

        let openai = OpenAiConfig {
            api_key: required("OPENAI_API_KEY")?,
            base_url: optional("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            embedding_model: optional("EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            embedding_dimension,
            chat_model: optional("CHAT_MODEL", DEFAULT_CHAT_MODEL),
            timeout_secs: parse_var("OPENAI_TIMEOUT_SECS", optional("OPENAI_TIMEOUT_SECS", "60"))?,
        };

        let cors_allowed_origins = optional(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:3000,http://127.0.0.1:3000",
        )
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            db_pool_size: parse_var("DB_POOL_SIZE", optional("DB_POOL_SIZE", "10"))?,
            openai,
            port: parse_var("PORT", optional("PORT", &DEFAULT_PORT.to_string()))?,
            cors_allowed_origins,
            docs_dir: PathBuf::from(optional("DOCS_DIR", DEFAULT_DOCS_DIR)),
        })
    }
}

fn parse_var<T: FromStr>(variable: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        variable: variable.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/posts"),
            ("OPENAI_API_KEY", "sk-test"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.db_pool_size, 10);
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.openai.base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.openai.embedding_model, "text-embedding-ada-002");
        assert_eq!(config.openai.embedding_dimension, 1536);
        assert_eq!(config.openai.chat_model, "gpt-3.5-turbo");
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/posts"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:9999/v1/"),
            ("PORT", "3001"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example"),
            ("DOCS_DIR", "/srv/docs"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.openai.base_url, "http://localhost:9999/v1");
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.docs_dir, PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_missing_required_variable() {
        let result = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db")]));

        match result {
            Err(ConfigError::MissingVariable(name)) => assert_eq!(name, "OPENAI_API_KEY"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_number() {
        let result = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db"),
            ("OPENAI_API_KEY", "sk-test"),
            ("PORT", "eighty"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_embedding_dimension_must_match_column() {
        let base = [
            ("DATABASE_URL", "postgres://db"),
            ("OPENAI_API_KEY", "sk-test"),
        ];

        let narrower =
            AppConfig::from_lookup(lookup(&[base[0], base[1], ("EMBEDDING_DIMENSION", "768")]));
        match narrower {
            Err(ConfigError::InvalidValue { variable, value }) => {
                assert_eq!(variable, "EMBEDDING_DIMENSION");
                assert_eq!(value, "768");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let explicit =
            AppConfig::from_lookup(lookup(&[base[0], base[1], ("EMBEDDING_DIMENSION", "1536")]))
                .unwrap();
        assert_eq!(explicit.openai.embedding_dimension, 1536);
    }
}
