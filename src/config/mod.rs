use std::env;

use tracing::warn;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_DATABASE_URL: &str = "sqlite://portfolio.db";
const DEFAULT_PORT: u16 = 3001;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Bearer token that unlocks event writes. `None` disables writes.
    pub admin_token: Option<String>,
    /// Where the client-side contact form posts to.
    pub contact_function_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT '{}' is not a number, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let admin_token = env::var("ADMIN_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        if admin_token.is_none() {
            warn!("ADMIN_TOKEN not set, event management is disabled");
        }

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            port,
            admin_token,
            contact_function_url: env::var("CONTACT_FUNCTION_URL").unwrap_or_else(|_| {
                format!("http://localhost:{}/functions/v1/submit-contact", port)
            }),
        }
    }
}
