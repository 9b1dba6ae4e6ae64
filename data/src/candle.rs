use crate::config::CalendarMode;
use exchange::Kline;

/// Linear factor between raw exchange prices and the scaled units all chart
/// geometry works in. Dividing keeps BTC-sized magnitudes compact enough for
/// scene coordinates.
pub const PRICE_DIVISOR: f32 = 1000.0;

/// One normalized daily candle in scaled price units, plus the calendar
/// fields its date label needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessedCandle {
    pub opening_price: f32,
    pub closing_price: f32,
    pub lowest_price: f32,
    pub highest_price: f32,
    /// Day of month, 1-31, from the open time.
    pub day_of_month: u32,
    /// Month, 0-11, from the open time.
    pub month0: u32,
}

impl ProcessedCandle {
    pub fn from_kline(kline: &Kline, calendar: CalendarMode) -> Self {
        let (day_of_month, month0) = calendar.date_parts(kline.time);

        Self {
            opening_price: kline.open / PRICE_DIVISOR,
            closing_price: kline.close / PRICE_DIVISOR,
            lowest_price: kline.low / PRICE_DIVISOR,
            highest_price: kline.high / PRICE_DIVISOR,
            day_of_month,
            month0,
        }
    }
}

/// Normalizes a fetched window into chart order: the API returns ascending
/// open times, the chart wants index 0 to be the most recent day.
pub fn process_klines(klines: &[Kline], calendar: CalendarMode) -> Vec<ProcessedCandle> {
    klines
        .iter()
        .rev()
        .map(|kline| ProcessedCandle::from_kline(kline, calendar))
        .collect()
}

/// Rounded arithmetic mean of opening prices, in scaled units. This anchors
/// the chart's vertical origin near the current price level.
///
/// `None` for an empty window.
pub fn reference_price(candles: &[ProcessedCandle]) -> Option<f32> {
    if candles.is_empty() {
        return None;
    }

    let sum: f32 = candles.iter().map(|c| c.opening_price).sum();
    Some((sum / candles.len() as f32).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kline(time: u64, open: f32, high: f32, low: f32, close: f32) -> Kline {
        Kline::new(time, open, high, low, close)
    }

    #[test]
    fn normalization_scales_by_divisor() {
        let raw = kline(1_700_006_400_000, 36700.0, 37999.0, 36500.0, 37500.0);
        let candle = ProcessedCandle::from_kline(&raw, CalendarMode::Utc);

        assert_eq!(candle.opening_price, 36.7);
        assert_eq!(candle.highest_price, 37.999);
        assert_eq!(candle.lowest_price, 36.5);
        assert_eq!(candle.closing_price, 37.5);
    }

    #[test]
    fn normalization_extracts_calendar_fields() {
        // 2023-11-15T00:00:00Z
        let raw = kline(1_700_006_400_000, 1.0, 1.0, 1.0, 1.0);
        let candle = ProcessedCandle::from_kline(&raw, CalendarMode::Utc);

        assert_eq!(candle.day_of_month, 15);
        assert_eq!(candle.month0, 10);
    }

    #[test]
    fn scale_round_trips_within_tolerance() {
        let raw = kline(0, 36789.12, 36789.12, 36789.12, 36789.12);
        let candle = ProcessedCandle::from_kline(&raw, CalendarMode::Utc);

        let restored = candle.opening_price * PRICE_DIVISOR;
        assert!((restored - 36789.12).abs() < 1e-2);
    }

    #[test]
    fn window_is_reversed_to_most_recent_first() {
        let klines = [
            kline(1, 1.0, 1.0, 1.0, 1.0),
            kline(2, 2.0, 2.0, 2.0, 2.0),
            kline(3, 3.0, 3.0, 3.0, 3.0),
        ];
        let candles = process_klines(&klines, CalendarMode::Utc);

        assert_eq!(candles[0].opening_price, 3.0 / PRICE_DIVISOR);
        assert_eq!(candles[2].opening_price, 1.0 / PRICE_DIVISOR);
    }

    #[test]
    fn reference_price_is_rounded_mean_of_opens() {
        let klines = [
            kline(1, 10_000.0, 10_000.0, 10_000.0, 10_000.0),
            kline(2, 20_000.0, 20_000.0, 20_000.0, 20_000.0),
            kline(3, 30_000.0, 30_000.0, 30_000.0, 30_000.0),
        ];
        let candles = process_klines(&klines, CalendarMode::Utc);

        assert_eq!(reference_price(&candles), Some(20.0));
    }

    #[test]
    fn reference_price_of_empty_window_is_none() {
        assert_eq!(reference_price(&[]), None);
    }
}
