//! Sidebar Widget
//! Left side panel with the single-choice chart selector.

use crate::charts::ChartKind;
use egui::{Color32, RichText};

/// Left side selection panel listing the ten charts.
pub struct Sidebar {
    pub selected: ChartKind,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            selected: ChartKind::ALL[0],
        }
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the sidebar; reports when the selection changed.
    pub fn show(&mut self, ui: &mut egui::Ui) -> SidebarAction {
        let mut action = SidebarAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🎬 Netflix Data Visualization")
                    .size(20.0)
                    .color(Color32::from_rgb(229, 9, 20)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("Choose a visualization:").size(14.0).strong());
        ui.add_space(5.0);

        for kind in ChartKind::ALL {
            let clicked = ui
                .selectable_label(self.selected == kind, kind.label())
                .clicked();
            if clicked && self.selected != kind {
                self.selected = kind;
                action = SidebarAction::SelectionChanged;
            }
        }

        action
    }
}

/// Actions triggered by the sidebar
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    SelectionChanged,
}
