use std::{net::SocketAddr, path::PathBuf};

use url::Url;

use crate::server::{
    error::{config::ConfigError, AppError},
    service::mail::MailRelay,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_UPLOAD_DIR: &str = "./uploads";
const DEFAULT_MAIL_FROM: &str = "no-reply@schoolboard.local";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub upload_dir: PathBuf,

    /// Credentials for the first admin, seeded only while no admin exists.
    pub admin_user: Option<String>,
    pub admin_password: Option<String>,

    /// `None` disables sending; notifications are logged instead.
    pub mail_relay: Option<MailRelay>,

    pub session_secure: bool,
    /// Frontend origin allowed by CORS.
    pub app_url: Option<Url>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| invalid("BIND_ADDRESS", e))?;

        let mail_relay = match optional("MAIL_API_URL") {
            Some(url) => {
                Url::parse(&url).map_err(|e| invalid("MAIL_API_URL", e))?;
                Some(MailRelay {
                    url,
                    token: optional("MAIL_API_TOKEN"),
                    from: optional("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
                })
            }
            None => None,
        };

        let session_secure = match optional("SESSION_SECURE") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|e| invalid("SESSION_SECURE", e))?,
            None => false,
        };

        let app_url = optional("APP_URL")
            .map(|value| Url::parse(&value).map_err(|e| invalid("APP_URL", e)))
            .transpose()?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address,
            upload_dir: optional("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            admin_user: optional("ADMIN_USER"),
            admin_password: optional("ADMIN_PASSWORD"),
            mail_relay,
            session_secure,
            app_url,
        })
    }
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn invalid(name: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
