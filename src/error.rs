use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum AisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("site unreachable: {0}")]
    Connectivity(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("navigation to '{endpoint}' failed after {attempts} attempts")]
    Navigation { endpoint: String, attempts: u32 },

    #[error("element access failed: {0}")]
    ElementAccess(String),

    #[error("browser session already closed")]
    SessionClosed,

    #[error("invalid ICAO code: '{0}'")]
    InvalidIcao(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AisError {
    pub fn element_access(message: impl Into<String>) -> Self {
        AisError::ElementAccess(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        AisError::Config(message.into())
    }

    /// Usage and configuration mistakes exit with 2; everything that went wrong
    /// while talking to the site or the browser exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            AisError::InvalidIcao(_) | AisError::Config(_) | AisError::InvalidUrl(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AisError>;
