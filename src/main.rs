use eframe::egui;
use std::io;
use tabtrail::app::TabTrail;
use tabtrail::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    let config = Config::load();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = Config::create_default() {
        tracing::warn!(error = %e, "could not write default config");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("TabTrail"),
        ..Default::default()
    };

    eframe::run_native(
        "TabTrail",
        options,
        Box::new(move |_cc| Ok(Box::new(TabTrail::new(&config)))),
    )
}
