//! Dashboard Main Application
//! Main window wiring the sidebar selector to the chart pipeline and the
//! fixed footer layout.

use std::path::Path;

use egui::{Color32, RichText, ScrollArea, SidePanel};
use log::{info, warn};

use crate::charts::{self, ChartKind, Figure};
use crate::data;
use crate::gui::{ChartView, InfoPanel, Sidebar, SidebarAction};

/// Footer gap between the three regions.
const FOOTER_GAP: f32 = 15.0;

/// One user-facing banner from the last render.
enum Notice {
    Success(String),
    Error(String),
}

/// Main application window.
pub struct DashboardApp {
    sidebar: Sidebar,
    notices: Vec<Notice>,
    selected_figure: Option<Figure>,
    trend_figure: Option<Figure>,
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self {
            sidebar: Sidebar::new(),
            notices: Vec::new(),
            selected_figure: None,
            trend_figure: None,
        }
    }
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        app.run_render();
        app
    }

    /// Run one full load, clean and build pass for the current selection.
    /// The CSV is re-read from disk every time; nothing is cached across
    /// renders.
    fn run_render(&mut self) {
        self.run_render_from(Path::new(data::DATA_FILE));
    }

    fn run_render_from(&mut self, path: &Path) {
        self.notices.clear();
        self.selected_figure = None;
        self.trend_figure = None;

        let df = match data::load_titles(path) {
            Ok(df) => df,
            Err(error) => {
                self.report_error(error.to_string());
                return;
            }
        };

        // The load has its own banner; cleaning can still fail after it.
        self.notices.push(Notice::Success(format!(
            "Data loaded successfully! {} rows, {} columns.",
            df.height(),
            df.width()
        )));

        let table = match data::clean(df) {
            Ok(table) => table,
            Err(error) => {
                self.report_error(error.to_string());
                return;
            }
        };

        self.notices.push(Notice::Success(format!(
            "Data cleaned successfully! {} rows ready.",
            table.height()
        )));

        let kind = self.sidebar.selected;
        match charts::build(kind, table.frame()) {
            Ok(figure) => self.selected_figure = Some(figure),
            Err(error) => self.report_error(format!("{}: {}", kind.label(), error)),
        }

        // The footer trend stays up no matter which chart is selected
        match charts::build(ChartKind::ReleaseTrend, table.frame()) {
            Ok(figure) => self.trend_figure = Some(figure),
            Err(error) => self.report_error(format!("Release trend: {}", error)),
        }

        info!("rendered selection {:?}", kind);
    }

    fn report_error(&mut self, message: String) {
        warn!("{}", message);
        self.notices.push(Notice::Error(message));
    }

    /// Draw the success and error banners from the last render.
    fn draw_notices(&self, ui: &mut egui::Ui) {
        for notice in &self.notices {
            let (text, color) = match notice {
                Notice::Success(text) => (text, Color32::from_rgb(40, 167, 69)),
                Notice::Error(text) => (text, Color32::from_rgb(220, 53, 69)),
            };

            egui::Frame::none()
                .fill(color.gamma_multiply(0.15))
                .rounding(5.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(text).size(13.0).color(color));
                });
            ui.add_space(5.0);
        }
    }

    /// Draw the fixed three-region footer with 2:3:3 width proportions.
    fn draw_footer(&self, ui: &mut egui::Ui) {
        let avail = ui.available_width() - 2.0 * FOOTER_GAP;
        let unit = avail / 8.0;

        ui.with_layout(
            egui::Layout::left_to_right(egui::Align::Min),
            |ui| {
                // Left region intentionally left empty
                ui.add_space(unit * 2.0 + FOOTER_GAP);

                ui.vertical(|ui| {
                    ui.set_width(unit * 3.0);
                    if let Some(figure) = &self.trend_figure {
                        ChartView::draw_card(ui, figure, false);
                    }
                });
                ui.add_space(FOOTER_GAP);

                ui.vertical(|ui| {
                    ui.set_width(unit * 3.0);
                    InfoPanel::draw(ui);
                });
            },
        );
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - chart selector
        SidePanel::left("sidebar")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    if self.sidebar.show(ui) == SidebarAction::SelectionChanged {
                        self.run_render();
                    }
                });
            });

        // Central panel - notices, selected chart, footer
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.draw_notices(ui);

                    if let Some(figure) = &self.selected_figure {
                        ChartView::draw_card(ui, figure, true);
                    }

                    ui.add_space(15.0);
                    ui.separator();
                    ui.add_space(10.0);

                    self.draw_footer(ui);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn load_success_is_signaled_even_when_cleaning_fails() {
        // rating column absent: the load works, cleaning reports the column
        let path = write_csv(
            "titlescope_app_no_rating.csv",
            "release_year,type,country,duration,listed_in,description\n\
             2020,Movie,Canada,90 min,Dramas,A film.\n",
        );

        let mut app = DashboardApp::default();
        app.run_render_from(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(app.notices.first(), Some(Notice::Success(_))));
        assert!(app
            .notices
            .iter()
            .any(|notice| matches!(notice, Notice::Error(text) if text.contains("rating"))));
        assert!(app.selected_figure.is_none());
        assert!(app.trend_figure.is_none());
    }

    #[test]
    fn a_valid_table_renders_without_errors() {
        let path = write_csv(
            "titlescope_app_valid.csv",
            "release_year,type,country,rating,duration,listed_in,description\n\
             2020,Movie,Canada,TV-MA,90 min,Dramas,A story of hope.\n\
             2021,TV Show,India,TV-MA,2 Seasons,Dramas,A detective drama.\n",
        );

        let mut app = DashboardApp::default();
        app.run_render_from(&path);
        std::fs::remove_file(&path).ok();

        assert!(app
            .notices
            .iter()
            .all(|notice| matches!(notice, Notice::Success(_))));
        assert_eq!(app.notices.len(), 2);
        assert!(app.selected_figure.is_some());
        assert!(app.trend_figure.is_some());
    }

    #[test]
    fn a_missing_file_reports_a_single_error() {
        let mut app = DashboardApp::default();
        app.run_render_from(Path::new("no_such_directory/netflix_titles.csv"));

        assert_eq!(app.notices.len(), 1);
        assert!(matches!(app.notices.first(), Some(Notice::Error(_))));
        assert!(app.selected_figure.is_none());
    }
}
