use crate::utils::error::Result;
use crate::utils::validation::{validate_port, validate_range, Validate};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_port_value(std::env::var("PORT").ok())
    }

    /// Unset or empty PORT falls back to the default.
    pub fn from_port_value(value: Option<String>) -> Result<Self> {
        let port = match value.as_deref() {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => validate_port("PORT", raw)?,
        };
        Ok(Self { port })
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_range("PORT", self.port, 1, u16::MAX)?;
        Ok(())
    }
}
