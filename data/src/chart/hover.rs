use crate::candle::{PRICE_DIVISOR, ProcessedCandle};

/// OHLC of the hovered candle in display units (scaled values multiplied back
/// by the price divisor). The picker performs that inverse step; subscribers
/// never see scaled values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverData {
    pub open: f32,
    pub high: f32,
    pub low: f32,
    pub close: f32,
}

impl HoverData {
    fn from_candle(candle: &ProcessedCandle) -> Self {
        Self {
            open: candle.opening_price * PRICE_DIVISOR,
            high: candle.highest_price * PRICE_DIVISOR,
            low: candle.lowest_price * PRICE_DIVISOR,
            close: candle.closing_price * PRICE_DIVISOR,
        }
    }
}

type HoverListener = Box<dyn FnMut(Option<HoverData>)>;

/// Maps pointer interactions on per-candle pick surfaces back to candle data.
///
/// Holds a single "current hover" slot: each enter overwrites it, a leave
/// clears it only if it still refers to the left surface, so a direct move
/// from surface `i` to `j` emits `[data_i, data_j]` with no `None` between.
pub struct HoverPicker {
    candles: Vec<ProcessedCandle>,
    current: Option<usize>,
    listener: Option<HoverListener>,
}

impl HoverPicker {
    pub fn new(candles: Vec<ProcessedCandle>) -> Self {
        Self {
            candles,
            current: None,
            listener: None,
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Option<HoverData>) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn unsubscribe(&mut self) {
        self.listener = None;
    }

    pub fn current(&self) -> Option<HoverData> {
        self.current
            .and_then(|i| self.candles.get(i))
            .map(HoverData::from_candle)
    }

    /// Pointer entered (or moved onto) surface `index`.
    pub fn pointer_enter(&mut self, index: usize) {
        let Some(candle) = self.candles.get(index) else {
            log::warn!("Hover enter for unknown surface: {index}");
            return;
        };

        let data = HoverData::from_candle(candle);
        self.current = Some(index);
        self.emit(Some(data));
    }

    /// Pointer left surface `index`. A stale leave delivered after the pointer
    /// already entered another surface is ignored.
    pub fn pointer_leave(&mut self, index: usize) {
        if self.current == Some(index) {
            self.current = None;
            self.emit(None);
        }
    }

    /// Routes a raw pointer x position: enters the column under it, or clears
    /// the hover when the pointer is off every surface. Re-entering the
    /// current column is a no-op.
    pub fn pointer_move(&mut self, x: f32, spacing: f32) {
        match surface_at(x, spacing, self.candles.len()) {
            Some(index) => {
                if self.current != Some(index) {
                    self.pointer_enter(index);
                }
            }
            None => {
                if let Some(current) = self.current {
                    self.pointer_leave(current);
                }
            }
        }
    }

    fn emit(&mut self, value: Option<HoverData>) {
        if let Some(listener) = &mut self.listener {
            listener(value);
        }
    }
}

/// Maps a pointer x position to the candle column under it. Columns are
/// `spacing`-wide slabs centered at `-i * spacing`.
pub fn surface_at(x: f32, spacing: f32, candle_count: usize) -> Option<usize> {
    if spacing <= 0.0 {
        return None;
    }

    let slot = (-x / spacing).round();
    if slot < 0.0 {
        return None;
    }

    let index = slot as usize;
    (index < candle_count).then_some(index)
}
