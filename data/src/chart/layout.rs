use super::{
    CandleBody, CandleDirection, CandleWick, ChartLayout, GridLine, PickSurface, Size3, TextLabel,
    Vec3,
};
use crate::candle::{PRICE_DIVISOR, ProcessedCandle};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How far a month-name label sits above its day label, in spatial units.
const MONTH_LABEL_LIFT: f32 = 0.8;

/// All layout constants, with units. One `price_scale` couples price and
/// space for every primitive, which is what keeps bodies, wicks, grid and
/// labels mutually proportionate against the same reference anchor.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Spatial units per scaled price unit.
    pub price_scale: f32,
    /// Horizontal distance between candle columns, in spatial units.
    pub candle_spacing: f32,
    /// Body box width and depth, in spatial units.
    pub body_thickness: f32,
    /// Wick box width and depth, in spatial units.
    pub wick_thickness: f32,
    /// Total horizontal grid lines. Purely decorative.
    pub grid_line_count: usize,
    /// How many of the grid lines sit below the origin row.
    pub grid_lines_below_origin: usize,
    /// Price label rows on each side of the reference anchor.
    pub price_label_rows: usize,
    /// Display-unit increment between price label rows. Fixed, not derived
    /// from the data range.
    pub price_label_step: f32,
    /// Horizontal position of the price label column, in spatial units.
    pub price_label_x: f32,
    /// Vertical position of date labels, in spatial units.
    pub date_label_y: f32,
    /// Depth of date labels toward the viewer, in spatial units.
    pub date_label_z: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            price_scale: 1.5,
            candle_spacing: 1.8,
            body_thickness: 1.0,
            wick_thickness: 0.3,
            grid_line_count: 50,
            grid_lines_below_origin: 20,
            price_label_rows: 15,
            price_label_step: 1000.0,
            price_label_x: 2.5,
            date_label_y: -2.0,
            date_label_z: 1.5,
        }
    }
}

/// Computes the pose of every visual primitive for an ordered candle set.
///
/// Index 0 is the most recent day and sits at the origin; columns extend in
/// negative x, so sequence order is spatial order. All vertical positions are
/// offsets from `reference_price` multiplied by `price_scale`.
pub fn layout(
    candles: &[ProcessedCandle],
    reference_price: f32,
    config: &LayoutConfig,
) -> ChartLayout {
    let mut chart = ChartLayout::default();

    for (i, candle) in candles.iter().enumerate() {
        let x = -(i as f32) * config.candle_spacing;

        chart.bodies.push(body_box(candle, x, reference_price, config));
        chart.wicks.push(wick_box(candle, x, reference_price, config));

        let wick_center = wick_center_y(candle, reference_price, config);
        let wick_height = config.price_scale * (candle.highest_price - candle.lowest_price);
        chart.pick_surfaces.push(PickSurface {
            position: Vec3::new(x, wick_center, 0.0),
            extent: (config.candle_spacing, wick_height),
            candle_index: i,
        });

        chart.date_labels.push(TextLabel {
            position: Vec3::new(x, config.date_label_y, config.date_label_z),
            text: candle.day_of_month.to_string(),
        });
        if candle.day_of_month == 1 {
            chart.date_labels.push(TextLabel {
                position: Vec3::new(
                    x,
                    config.date_label_y + MONTH_LABEL_LIFT,
                    config.date_label_z,
                ),
                text: MONTH_NAMES[candle.month0 as usize % 12].to_string(),
            });
        }
    }

    chart.grid_lines = grid_lines(candles.len(), config);
    chart.price_labels = price_labels(reference_price, config);

    chart
}

fn body_box(
    candle: &ProcessedCandle,
    x: f32,
    reference_price: f32,
    config: &LayoutConfig,
) -> CandleBody {
    let open = candle.opening_price;
    let close = candle.closing_price;

    let body_span = (open - close).abs();
    let body_mid = open.min(close) + body_span / 2.0;

    CandleBody {
        position: Vec3::new(x, config.price_scale * (body_mid - reference_price), 0.0),
        size: Size3::new(
            config.body_thickness,
            config.price_scale * body_span,
            config.body_thickness,
        ),
        direction: CandleDirection::classify(open, close),
    }
}

fn wick_box(
    candle: &ProcessedCandle,
    x: f32,
    reference_price: f32,
    config: &LayoutConfig,
) -> CandleWick {
    let range = candle.highest_price - candle.lowest_price;

    CandleWick {
        position: Vec3::new(x, wick_center_y(candle, reference_price, config), 0.0),
        size: Size3::new(
            config.wick_thickness,
            config.price_scale * range,
            config.wick_thickness,
        ),
    }
}

/// The wick is centered on the full high-low range regardless of body
/// direction.
fn wick_center_y(candle: &ProcessedCandle, reference_price: f32, config: &LayoutConfig) -> f32 {
    let range = candle.highest_price - candle.lowest_price;
    config.price_scale * (candle.lowest_price + range / 2.0 - reference_price)
}

fn grid_lines(candle_count: usize, config: &LayoutConfig) -> Vec<GridLine> {
    let width = (candle_count.max(1) as f32) * config.candle_spacing;
    let center_x = -((candle_count.saturating_sub(1)) as f32) * config.candle_spacing / 2.0;

    (0..config.grid_line_count)
        .map(|i| {
            let row = i as f32 - config.grid_lines_below_origin as f32;
            GridLine {
                position: Vec3::new(center_x, config.price_scale * row, 0.0),
                width,
            }
        })
        .collect()
}

/// One anchor label at the reference price plus a fixed row count on each
/// side. Row text steps by a flat `price_label_step` display units and row
/// height by one `price_scale`; the grid is intentionally not adaptive to the
/// real price range.
fn price_labels(reference_price: f32, config: &LayoutConfig) -> Vec<TextLabel> {
    let display_reference = reference_price * PRICE_DIVISOR;
    let rows = config.price_label_rows as i32;

    (-rows..=rows)
        .map(|row| {
            let value = display_reference + row as f32 * config.price_label_step;
            TextLabel {
                position: Vec3::new(
                    config.price_label_x,
                    config.price_scale * row as f32,
                    0.0,
                ),
                text: format!("{value:.0}"),
            }
        })
        .collect()
}
