mod app;
mod config;
mod event;
mod model;
mod selection;
mod stats;
mod theme;

use app::PickerApp;
use clap::Parser;
use config::{AppConfig, Cli};
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli)?;
    tracing::info!(
        items = config.item_count,
        seed = ?config.seed,
        attribute = config.target.attribute().as_str(),
        value = config.target.value().as_str(),
        ratio = config.target.ratio(),
        "starting ratio picker"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let items = model::generate(config.item_count, &mut rng);
    let app = PickerApp::new(&config, items);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Ratio Picker",
        native_options,
        Box::new(move |creation_context| {
            app.theme().apply_visuals(&creation_context.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
