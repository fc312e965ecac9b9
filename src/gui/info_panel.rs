//! Info Panel Widget
//! Fixed informational texts shown in the dashboard footer.

use egui::RichText;

const KAGGLE_URL: &str = "https://www.kaggle.com/datasets/padmapriyatr/netflix-titles";
const CREATOR: &str = "Alisson Barreto";

/// Static data-source and dataset notes.
pub struct InfoPanel;

impl InfoPanel {
    pub fn draw(ui: &mut egui::Ui) {
        ui.label(RichText::new("Data Source").size(16.0).strong());
        ui.add_space(4.0);
        ui.hyperlink_to("Netflix Titles dataset on Kaggle", KAGGLE_URL);
        ui.add_space(12.0);

        ui.label(RichText::new("Dashboard Creator").size(16.0).strong());
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Created by:");
            ui.label(RichText::new(CREATOR).strong());
        });
        ui.add_space(12.0);

        ui.label(RichText::new("Dataset Description").size(16.0).strong());
        ui.add_space(4.0);
        ui.label("Each row is one Netflix title with the fields:");
        ui.add_space(2.0);
        ui.label("• type: Movie or TV Show");
        ui.label("• release_year: year the title was released");
        ui.label("• country: producing country or countries");
        ui.label("• rating: audience rating category");
        ui.label("• duration: minutes for movies, seasons for shows");
        ui.label("• listed_in: comma separated genre tags");
        ui.label("• description: short synopsis");
    }
}
