pub mod hover;
pub mod layout;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size3 {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Size3 {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// Binary up/down palette selector for a candle body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CandleDirection {
    Up,
    Down,
}

impl CandleDirection {
    /// `Up` only on a strict gain; a flat day reads as `Down`.
    pub fn classify(open: f32, close: f32) -> Self {
        if close > open {
            CandleDirection::Up
        } else {
            CandleDirection::Down
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CandleBody {
    pub position: Vec3,
    pub size: Size3,
    pub direction: CandleDirection,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandleWick {
    pub position: Vec3,
    pub size: Size3,
}

/// Decorative horizontal reference line spanning the chart width.
#[derive(Debug, Clone, Serialize)]
pub struct GridLine {
    pub position: Vec3,
    pub width: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextLabel {
    pub position: Vec3,
    pub text: String,
}

/// Invisible slab used solely to detect pointer hover over one candle's
/// column. `extent` is (width, height) in spatial units.
#[derive(Debug, Clone, Serialize)]
pub struct PickSurface {
    pub position: Vec3,
    pub extent: (f32, f32),
    pub candle_index: usize,
}

/// Every positioned primitive of one chart, in plain data form. A rendering
/// adapter turns these into draw calls; nothing here depends on a renderer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartLayout {
    pub bodies: Vec<CandleBody>,
    pub wicks: Vec<CandleWick>,
    pub grid_lines: Vec<GridLine>,
    pub price_labels: Vec<TextLabel>,
    pub date_labels: Vec<TextLabel>,
    pub pick_surfaces: Vec<PickSurface>,
}
