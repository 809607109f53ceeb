use std::env;
use std::fmt;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CLUSTER: &str = "cluster0.jxgrj34.mongodb.net";
const DEFAULT_DATABASE: &str = "perfectFitDB";

/// Process configuration, read once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    MissingDatabaseCredentials,
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingDatabaseCredentials => {
                write!(f, "DATABASE_URL or DB_USER/DB_PASSWORD must be set")
            }
            ConfigError::InvalidPort(raw) => {
                write!(f, "PORT must be a valid port number, got '{}'", raw)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => {
                let (user, password) = match (var("DB_USER"), var("DB_PASSWORD")) {
                    (Some(user), Some(password)) => (user, password),
                    _ => return Err(ConfigError::MissingDatabaseCredentials),
                };
                let cluster = var("DB_CLUSTER").unwrap_or_else(|| DEFAULT_CLUSTER.to_string());
                format!(
                    "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName=Cluster0",
                    urlencoding::encode(&user),
                    urlencoding::encode(&password),
                    cluster
                )
            }
        };

        let database_name = var("DATABASE_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let cors_origins = var("CORS_ALLOWED_ORIGINS").map(|raw| {
            raw.split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect()
        });

        Ok(Self {
            host,
            port,
            database_url,
            database_name,
            cors_origins,
        })
    }

    /// Connection string safe to log (password masked).
    pub fn redacted_database_url(&self) -> String {
        let Some((scheme, rest)) = self.database_url.split_once("://") else {
            return self.database_url.clone();
        };
        match rest.split_once('@') {
            Some((credentials, host)) => {
                let user = credentials.split(':').next().unwrap_or_default();
                format!("{}://{}:****@{}", scheme, user, host)
            }
            None => self.database_url.clone(),
        }
    }
}
