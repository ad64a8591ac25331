use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,
    pub request_timeout_secs: u64,

    // Email reminders (Resend)
    pub resend_api_key: Option<String>,
    pub email_from: String,
    pub reminder_recipient: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .context("PORT must be a number")?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|extra| split_origins(&extra))
                .unwrap_or_default(),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a number")?,

            resend_api_key: non_empty_var("RESEND_API_KEY"),
            email_from: env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "onboarding@resend.dev".into()),
            reminder_recipient: non_empty_var("REMINDER_EMAIL_TO"),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_origins_trims_and_skips_blanks() {
        let origins = split_origins(" http://a.local:3000, ,http://b.local ");
        assert_eq!(origins, vec!["http://a.local:3000", "http://b.local"]);
    }

    #[test]
    fn test_split_origins_empty() {
        assert!(split_origins("").is_empty());
    }

    #[test]
    fn test_listen_addr() {
        let config = Config {
            database_url: "postgres://localhost/organizer".into(),
            database_max_connections: 10,
            host: "127.0.0.1".into(),
            port: 9000,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: vec![],
            request_timeout_secs: 30,
            resend_api_key: None,
            email_from: "onboarding@resend.dev".into(),
            reminder_recipient: None,
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
    }
}
