//! Command handlers.
//!
//! Each handler opens a `command.<area>.<operation>` root span and delegates
//! to a use case on [`yb_app::App`].

pub mod dashboard;
pub mod error;
pub mod setup;

pub use error::map_err;
