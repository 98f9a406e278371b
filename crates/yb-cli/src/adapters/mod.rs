//! Terminal-side port implementations.

mod approval_signer;
mod setup_events;

pub use approval_signer::{ApprovalPrompt, PromptingSigner, TerminalApprovalPrompt};
pub use setup_events::TerminalSetupEvents;
