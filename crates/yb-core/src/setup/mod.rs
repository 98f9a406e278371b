//! Setup domain module.
//!
//! This module defines the two-step onboarding state machine types.

pub mod progress;
pub mod state_machine;
pub mod step;

pub use progress::SetupProgress;
pub use state_machine::{SetupAction, SetupEvent, SetupState, SetupStateMachine};
pub use step::{SetupStep, SetupStepId};
