use data::chart::{CandleDirection, ChartLayout, Size3, Vec3};

/// Font resource for all text primitives, referenced by path only; the
/// rendering collaborator owns loading.
pub const LABEL_FONT: &str = "fonts/AzeretMono-Regular.ttf";

/// Material selector a backend maps to its own palette. `UpBody`/`DownBody`
/// carry the candle's direction; everything else is fixed chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    UpBody,
    DownBody,
    Wick,
    GridLine,
}

/// The rendering collaborator's surface: draw a box or text at a pose, and
/// register an invisible hover region. Keeping the chart core behind this
/// trait is what lets the geometry be tested without a renderer.
pub trait RenderBackend {
    fn draw_box(&mut self, position: Vec3, size: Size3, material: Material);
    fn draw_text(&mut self, position: Vec3, text: &str, font: &str);
    fn add_pick_surface(&mut self, position: Vec3, extent: (f32, f32), candle_index: usize);
}

/// Walks a computed layout and issues draw calls in a fixed order: grid
/// behind, then wicks, bodies, labels, and finally the pick surfaces.
pub fn present(layout: &ChartLayout, backend: &mut impl RenderBackend) {
    for line in &layout.grid_lines {
        backend.draw_box(
            line.position,
            Size3::new(line.width, 0.02, 0.02),
            Material::GridLine,
        );
    }

    for wick in &layout.wicks {
        backend.draw_box(wick.position, wick.size, Material::Wick);
    }

    for body in &layout.bodies {
        let material = match body.direction {
            CandleDirection::Up => Material::UpBody,
            CandleDirection::Down => Material::DownBody,
        };
        backend.draw_box(body.position, body.size, material);
    }

    for label in layout.price_labels.iter().chain(&layout.date_labels) {
        backend.draw_text(label.position, &label.text, LABEL_FONT);
    }

    for surface in &layout.pick_surfaces {
        backend.add_pick_surface(surface.position, surface.extent, surface.candle_index);
    }
}

/// Headless backend: counts primitives and traces each call. Backs the binary
/// when no real renderer is attached.
#[derive(Debug, Default)]
pub struct LoggingBackend {
    pub boxes: usize,
    pub texts: usize,
    pub surfaces: usize,
}

impl RenderBackend for LoggingBackend {
    fn draw_box(&mut self, position: Vec3, size: Size3, material: Material) {
        log::trace!(
            "box {:?} at ({:.2}, {:.2}, {:.2}) size ({:.2}, {:.2}, {:.2})",
            material,
            position.x,
            position.y,
            position.z,
            size.width,
            size.height,
            size.depth,
        );
        self.boxes += 1;
    }

    fn draw_text(&mut self, position: Vec3, text: &str, _font: &str) {
        log::trace!(
            "text {:?} at ({:.2}, {:.2}, {:.2})",
            text,
            position.x,
            position.y,
            position.z,
        );
        self.texts += 1;
    }

    fn add_pick_surface(&mut self, _position: Vec3, _extent: (f32, f32), candle_index: usize) {
        log::trace!("pick surface for candle {candle_index}");
        self.surfaces += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data::CalendarMode;
    use data::candle::process_klines;
    use data::chart::layout::{LayoutConfig, layout};
    use exchange::Kline;

    #[test]
    fn presents_every_primitive_exactly_once() {
        let klines = [
            Kline::new(1, 10_000.0, 11_000.0, 9_000.0, 10_500.0),
            Kline::new(2, 10_500.0, 12_000.0, 10_000.0, 11_500.0),
        ];
        let candles = process_klines(&klines, CalendarMode::Utc);
        let config = LayoutConfig::default();
        let chart = layout(&candles, 10.0, &config);

        let mut backend = LoggingBackend::default();
        present(&chart, &mut backend);

        let expected_boxes =
            chart.grid_lines.len() + chart.wicks.len() + chart.bodies.len();
        assert_eq!(backend.boxes, expected_boxes);
        assert_eq!(
            backend.texts,
            chart.price_labels.len() + chart.date_labels.len()
        );
        assert_eq!(backend.surfaces, candles.len());
    }
}
