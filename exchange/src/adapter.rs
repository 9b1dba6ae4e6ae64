pub mod binance;

#[derive(thiserror::Error, Debug)]
pub enum AdapterError {
    #[error("{0}")]
    FetchError(#[from] reqwest::Error),
    #[error("Parsing: {0}")]
    ParseError(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AdapterError {
    /// Short, user-presentable description without request internals.
    pub fn to_user_message(&self) -> &'static str {
        match self {
            AdapterError::FetchError(_) => "Could not reach the market data service",
            AdapterError::ParseError(_) => "Market data response was malformed",
            AdapterError::InvalidRequest(_) => "Market data request was rejected",
        }
    }
}
