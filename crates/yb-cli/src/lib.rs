//! Terminal shell for yieldboard.
//!
//! Loads configuration, sets up tracing, wires the application and exposes
//! the dashboard, balance and interactive setup commands.

pub mod adapters;
pub mod bootstrap;
pub mod commands;
pub mod render;
pub mod session;

pub use bootstrap::{load_config, run_balance, run_dashboard, run_setup};
