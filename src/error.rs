use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Signing error: {0}")]
    SigningError(String),
    #[error("Settings error: {0}")]
    SettingsError(String),
    #[error("Gateway not configured: {0}")]
    NotConfigured(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
    #[error("Order not found: {0}")]
    OrderNotFound(String),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
