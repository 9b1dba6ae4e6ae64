use super::AdapterError;
use crate::{FetchConfig, Kline, de_string_to_f32};

use serde::Deserialize;

const SPOT_DOMAIN: &str = "https://api.binance.com";

/// One row of the klines endpoint response.
///
/// Binance returns each kline as a 12-element JSON array: open time, OHLC and
/// volume as decimal strings, close time, quote volume, trade count, taker-buy
/// base/quote volumes and an unused field. Only open time and OHLC are
/// consumed downstream.
#[derive(Deserialize, Debug, Clone)]
struct FetchedKline(
    u64,
    #[serde(deserialize_with = "de_string_to_f32")] f32,
    #[serde(deserialize_with = "de_string_to_f32")] f32,
    #[serde(deserialize_with = "de_string_to_f32")] f32,
    #[serde(deserialize_with = "de_string_to_f32")] f32,
    #[serde(deserialize_with = "de_string_to_f32")] f32,
    u64,
    String,
    u32,
    #[serde(deserialize_with = "de_string_to_f32")] f32,
    String,
    String,
);

impl From<FetchedKline> for Kline {
    fn from(k: FetchedKline) -> Self {
        let FetchedKline(
            time,
            open,
            high,
            low,
            close,
            _volume,
            _close_time,
            _quote_asset_volume,
            _number_of_trades,
            _taker_buy_base_asset_volume,
            _taker_buy_quote_asset_volume,
            _ignore,
        ) = k;

        Kline::new(time, open, high, low, close)
    }
}

fn klines_url(config: &FetchConfig) -> String {
    let mut url = format!(
        "{SPOT_DOMAIN}/api/v3/klines?symbol={}&interval={}&limit={}",
        config.symbol, config.interval, config.limit,
    );
    if let Some(start_time) = config.start_time {
        url.push_str(&format!("&startTime={start_time}"));
    }
    url
}

/// Fetches one window of klines, ascending by open time.
pub async fn fetch_klines(config: &FetchConfig) -> Result<Vec<Kline>, AdapterError> {
    if config.limit == 0 {
        return Err(AdapterError::InvalidRequest(
            "kline limit must be positive".to_string(),
        ));
    }
    let valid_symbol = config
        .symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid_symbol {
        return Err(AdapterError::InvalidRequest(format!(
            "unsupported symbol: {:?}",
            config.symbol
        )));
    }

    let url = klines_url(config);
    log::debug!("Fetching klines: {url}");

    let response = reqwest::get(&url).await?.error_for_status()?;
    let text = response.text().await?;

    let fetched: Vec<FetchedKline> =
        serde_json::from_str(&text).map_err(|e| AdapterError::ParseError(e.to_string()))?;

    Ok(fetched.into_iter().map(Kline::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r#"[
        [1700006400000, "36700.10", "37999.99", "36500.00", "37500.50", "12345.6",
         1700092799999, "456789.0", 987654, "6000.1", "225000.0", "0"]
    ]"#;

    #[test]
    fn deserializes_kline_row() {
        let rows: Vec<FetchedKline> = serde_json::from_str(ROW).unwrap();
        assert_eq!(rows.len(), 1);

        let kline = Kline::from(rows[0].clone());
        assert_eq!(kline.time, 1_700_006_400_000);
        assert_eq!(kline.open, 36700.10);
        assert_eq!(kline.high, 37999.99);
        assert_eq!(kline.low, 36500.00);
        assert_eq!(kline.close, 37500.50);
    }

    #[test]
    fn malformed_price_string_is_an_error() {
        let bad = ROW.replace("36700.10", "not-a-number");
        let result: Result<Vec<FetchedKline>, _> = serde_json::from_str(&bad);
        assert!(result.is_err());
    }

    #[test]
    fn url_includes_window_parameters() {
        let config = FetchConfig {
            start_time: Some(1_700_000_000_000),
            ..FetchConfig::default()
        };
        let url = klines_url(&config);
        assert_eq!(
            url,
            "https://api.binance.com/api/v3/klines\
             ?symbol=BTCUSDT&interval=1d&limit=122&startTime=1700000000000"
        );
    }

    #[test]
    fn rejects_invalid_symbols() {
        let config = FetchConfig {
            symbol: "BTC/USDT".to_string(),
            ..FetchConfig::default()
        };
        let result = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(fetch_klines(&config));
        assert!(matches!(result, Err(AdapterError::InvalidRequest(_))));
    }
}
