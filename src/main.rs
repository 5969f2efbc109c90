mod app;
mod catalog;
mod config;
mod connections;
mod export;
mod filter;
mod positions;
mod util;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use catalog::CatalogSource;
use config::MapConfig;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Catalog JSON to load instead of the bundled one.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Allow dragging nodes and saving the layout.
    #[arg(long)]
    edit_mode: bool,
    /// Directory that receives updated_games.json.
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "detective_map=info".into()),
        )
        .init();

    let args = Args::parse();
    let source = args
        .catalog
        .map_or(CatalogSource::Bundled, CatalogSource::File);
    let config = MapConfig::new(args.edit_mode, args.export_dir);
    tracing::info!(
        %source,
        edit_mode_enabled = config.edit_mode_enabled,
        "starting detective-map"
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Detecting Mechanics Visualization",
        options,
        Box::new(move |cc| Ok(Box::new(app::GameMapApp::new(cc, source, config)))),
    )
}
