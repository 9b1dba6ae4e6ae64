pub mod adapter;

use serde::Deserialize;

/// One time-bucketed OHLC summary, in raw exchange units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kline {
    pub time: u64,
    pub open: f32,
    pub high: f32,
    pub low: f32,
    pub close: f32,
}

impl Kline {
    pub fn new(time: u64, open: f32, high: f32, low: f32, close: f32) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
    }
}

/// Fixed parameters for one kline window request.
///
/// `interval` is a Binance interval code ("1d"); `limit` is the maximum row
/// count of the response; `start_time` is an optional epoch-millisecond lower
/// bound for the window.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub symbol: String,
    pub interval: String,
    pub limit: u32,
    pub start_time: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            symbol: "BTCUSDT".to_string(),
            interval: "1d".to_string(),
            limit: 122,
            start_time: None,
        }
    }
}

pub(crate) fn de_string_to_f32<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    s.parse::<f32>().map_err(serde::de::Error::custom)
}
