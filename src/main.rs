mod logger;
mod scene;
mod shell;

use data::chart::layout::LayoutConfig;
use exchange::FetchConfig;
use scene::{LoggingBackend, present};
use shell::{ChartShell, ChartState};

fn main() {
    logger::setup(cfg!(debug_assertions)).expect("Failed to initialize logger");

    std::panic::set_hook(Box::new(|info| {
        let location = info.location().map_or_else(
            || "unknown location".to_string(),
            |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
        );
        let msg = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        log::error!("PANIC at {location}: {msg}");
        eprintln!("PANIC at {location}: {msg}");
    }));

    let runtime = tokio::runtime::Runtime::new().expect("Failed to start async runtime");
    runtime.block_on(run());
}

async fn run() {
    let mut shell = ChartShell::new(FetchConfig::default(), LayoutConfig::default())
        .with_calendar(data::CalendarMode::Local);
    shell.load().await;
    debug_assert!(!shell.is_loading(), "load() resolves the state");

    if let Some(message) = shell.error() {
        log::error!("{message}");
        return;
    }

    if let ChartState::Ready {
        candles,
        reference_price,
        layout,
    } = shell.state()
    {
        let mut backend = LoggingBackend::default();
        present(layout, &mut backend);

        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(layout) {
                Ok(json) => log::debug!("Scene description: {json}"),
                Err(e) => log::warn!("Failed to serialize scene: {e}"),
            }
        }

        log::info!(
            "Presented {} candles around reference {:.0}: {} boxes, {} labels, {} pick surfaces",
            candles.len(),
            reference_price * data::candle::PRICE_DIVISOR,
            backend.boxes,
            backend.texts,
            backend.surfaces,
        );
    }

    // Headless stand-in for the HUD: sweep the pointer over the newest
    // candle's column, then off the chart.
    if let Some(picker) = shell.picker_mut() {
        picker.subscribe(|data| match data {
            Some(d) => log::info!(
                "HUD: O {:.2} H {:.2} L {:.2} C {:.2}",
                d.open,
                d.high,
                d.low,
                d.close
            ),
            None => log::info!("HUD cleared"),
        });
    }
    shell.hover_at(0.0);
    shell.hover_at(-1.0e6);
}
