//! Server Configuration
//!
//! Read once from the environment at startup.

use anyhow::Context;
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `USERS_API_ADDR`
    pub addr: SocketAddr,
    /// `FRONTEND_ORIGINS`, comma separated
    pub allowed_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            env::var("USERS_API_ADDR").ok().as_deref(),
            env::var("FRONTEND_ORIGINS").ok().as_deref(),
        )
    }

    fn from_vars(addr: Option<&str>, origins: Option<&str>) -> anyhow::Result<Self> {
        let addr = addr.unwrap_or(DEFAULT_ADDR);
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("USERS_API_ADDR is not a socket address: {addr}"))?;

        // Unparsable origins are skipped rather than failing startup
        let allowed_origins = origins
            .unwrap_or(DEFAULT_FRONTEND_ORIGINS)
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        Ok(Self {
            addr,
            allowed_origins,
        })
    }
}
