//! Chart View Widget
//! Framed card that titles and renders one figure.

use crate::charts::{ChartPlotter, Figure};
use egui::RichText;

/// Chart display card.
pub struct ChartView;

impl ChartView {
    /// Draw a figure inside a framed card with its title on top.
    pub fn draw_card(ui: &mut egui::Ui, figure: &Figure, full_size: bool) {
        egui::Frame::none()
            .rounding(8.0)
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    let title_size = if full_size { 18.0 } else { 14.0 };
                    ui.label(RichText::new(figure.title()).size(title_size).strong());
                    ui.add_space(8.0);
                    ChartPlotter::draw_figure(ui, figure, full_size);
                });
            });
    }
}
