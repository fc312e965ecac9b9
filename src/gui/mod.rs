//! GUI module - User interface components

mod app;
mod chart_view;
mod info_panel;
mod sidebar;

pub use app::DashboardApp;
pub use chart_view::ChartView;
pub use info_panel::InfoPanel;
pub use sidebar::{Sidebar, SidebarAction};
