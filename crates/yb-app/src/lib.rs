//! yieldboard Application Orchestration Layer
//!
//! This crate contains the use cases behind the dashboard: the onboarding
//! orchestrator, the two step executors and the shared balance reader.

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::App;
pub use deps::{AppDeps, BalanceTarget};
