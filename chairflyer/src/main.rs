// main.rs - windowed front-end for the life_engine simulator

use clap::Parser;
use eframe::egui;

mod app;
mod args;
mod pacing;
mod player;
mod ui;

use app::App;
use args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let app = App::new(&args)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native("chairflyer", options, Box::new(|_cc| Box::new(app)))
        .map_err(|err| anyhow::anyhow!("window loop failed: {err}"))
}
