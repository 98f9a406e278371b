pub mod config;
pub mod tracing;
pub mod run;
pub mod wiring;

pub use config::load_config;
pub use run::{run_balance, run_dashboard, run_setup};
pub use wiring::{resolve_settings, wire_app, ResolvedSettings, SignatureApproval, WiredApp};
