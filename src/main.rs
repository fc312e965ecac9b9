//! Titlescope - Netflix Titles Data Visualization
//!
//! A Rust dashboard for exploring the Netflix titles dataset with
//! interactive charts.

mod charts;
mod data;
mod gui;
mod stats;

use eframe::egui;
use gui::DashboardApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1200.0, 700.0])
            .with_title("Netflix Data Visualization"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Netflix Data Visualization",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
