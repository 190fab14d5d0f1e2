//! Environment-driven configuration

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_JWT_SECRET: &str = "formworks-dev-secret-change-in-production";

pub struct Config {
    pub addr: String,
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            addr: std::env::var("FORMWORKS_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into()),
            jwt_secret: std::env::var("FORMWORKS_JWT_SECRET")
                .unwrap_or_else(|_| DEFAULT_JWT_SECRET.into()),
        }
    }
}
