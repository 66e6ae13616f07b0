use admitted_dashboard::app::DashboardApp;
use admitted_dashboard::config::{Cli, Config};
use admitted_dashboard::data::{loader, DashboardView, FilterState};
use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;

    // The dashboard has nothing to show without its dataset: fail at startup.
    let dataset = loader::load_file(&config.data_path)
        .with_context(|| format!("loading dataset {}", config.data_path.display()))?;

    if cli.summary {
        let view = DashboardView::compute(&dataset, &FilterState::new());
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(dataset, title)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
