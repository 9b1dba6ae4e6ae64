pub mod candle;
pub mod chart;
pub mod config;

pub use config::CalendarMode;

#[derive(thiserror::Error, Debug, Clone)]
pub enum InternalError {
    #[error("Fetch error: {0}")]
    Fetch(String),
    #[error("Chart error: {0}")]
    Chart(String),
}
