//! Plain-text rendering of the dashboard and the setup panel.

mod dashboard;
mod setup;

pub use dashboard::{render_balance, render_dashboard};
pub use setup::{progress_summary, render_setup_panel, PanelContext};
