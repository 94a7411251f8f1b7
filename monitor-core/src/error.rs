use thiserror::Error;

pub type Result<T> = std::result::Result<T, MonitorError>;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("settings error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("settings serialization error: {0}")]
    SettingsWrite(#[from] toml::ser::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("custom error: {0}")]
    Custom(String),
}

impl MonitorError {
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }
}
