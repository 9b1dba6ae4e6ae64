use data::candle::{self, ProcessedCandle};
use data::chart::ChartLayout;
use data::chart::hover::HoverPicker;
use data::chart::layout::{LayoutConfig, layout};
use data::{CalendarMode, InternalError};
use exchange::{FetchConfig, Kline, adapter::binance};

/// Display state of the chart page. Either the whole chart is ready or a
/// single error message replaces it; there is no partial-render mode.
pub enum ChartState {
    Loading,
    Ready {
        candles: Vec<ProcessedCandle>,
        reference_price: f32,
        layout: ChartLayout,
    },
    Failed(String),
}

/// Orchestrates fetch → normalize → reduce → layout and owns the resulting
/// derived state plus the hover picker. The fetch runs once; everything
/// downstream is synchronous and immutable afterwards.
pub struct ChartShell {
    fetch_config: FetchConfig,
    layout_config: LayoutConfig,
    calendar: CalendarMode,
    state: ChartState,
    picker: Option<HoverPicker>,
}

impl ChartShell {
    pub fn new(fetch_config: FetchConfig, layout_config: LayoutConfig) -> Self {
        Self {
            fetch_config,
            layout_config,
            calendar: CalendarMode::default(),
            state: ChartState::Loading,
            picker: None,
        }
    }

    pub fn with_calendar(mut self, calendar: CalendarMode) -> Self {
        self.calendar = calendar;
        self
    }

    pub async fn load(&mut self) {
        let result = binance::fetch_klines(&self.fetch_config)
            .await
            .map_err(|e| {
                log::error!("Kline fetch failed: {e}");
                InternalError::Fetch(e.to_user_message().to_string())
            })
            .and_then(|klines| build_chart(&klines, self.calendar, &self.layout_config));

        match result {
            Ok((candles, reference_price, chart_layout)) => {
                log::info!(
                    "Chart ready: {} candles, reference price {reference_price}",
                    candles.len(),
                );
                self.picker = Some(HoverPicker::new(candles.clone()));
                self.state = ChartState::Ready {
                    candles,
                    reference_price,
                    layout: chart_layout,
                };
            }
            Err(err) => {
                log::error!("Chart load failed: {err}");
                self.picker = None;
                self.state = ChartState::Failed(err.to_string());
            }
        }
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ChartState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ChartState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn picker_mut(&mut self) -> Option<&mut HoverPicker> {
        self.picker.as_mut()
    }

    /// Forwards a pointer x position from the input collaborator to the
    /// hover picker, using the chart's column spacing.
    pub fn hover_at(&mut self, x: f32) {
        let spacing = self.layout_config.candle_spacing;
        if let Some(picker) = self.picker.as_mut() {
            picker.pointer_move(x, spacing);
        }
    }
}

/// The synchronous tail of the pipeline, shared by `load` and tests.
fn build_chart(
    klines: &[Kline],
    calendar: CalendarMode,
    config: &LayoutConfig,
) -> Result<(Vec<ProcessedCandle>, f32, ChartLayout), InternalError> {
    let candles = candle::process_klines(klines, calendar);

    let reference_price = candle::reference_price(&candles)
        .ok_or_else(|| InternalError::Chart("empty kline window".to_string()))?;

    let chart_layout = layout(&candles, reference_price, config);
    Ok((candles, reference_price, chart_layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Kline> {
        vec![
            Kline::new(1_700_006_400_000, 10_000.0, 10_500.0, 9_500.0, 10_200.0),
            Kline::new(1_700_092_800_000, 20_000.0, 21_000.0, 19_000.0, 20_500.0),
            Kline::new(1_700_179_200_000, 30_000.0, 31_000.0, 29_000.0, 30_500.0),
        ]
    }

    #[test]
    fn end_to_end_fixture_resolves_reference_and_order() {
        let (candles, reference_price, chart) =
            build_chart(&fixture(), CalendarMode::Utc, &LayoutConfig::default()).unwrap();

        assert_eq!(reference_price, 20.0);

        // the chronologically last kline is index 0, at the origin
        assert_eq!(candles[0].opening_price, 30.0);
        assert_eq!(chart.bodies[0].position.x, 0.0);
        assert_eq!(chart.bodies.len(), 3);
        assert_eq!(chart.pick_surfaces.len(), 3);
    }

    #[test]
    fn empty_window_is_an_explicit_error() {
        let result = build_chart(&[], CalendarMode::Utc, &LayoutConfig::default());
        assert!(matches!(result, Err(InternalError::Chart(_))));
    }
}
