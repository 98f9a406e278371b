use async_trait::async_trait;
use tracing::debug;
use yb_core::ports::SetupEventPort;
use yb_core::SetupProgress;

use crate::render::progress_summary;

/// Prints a one-line summary whenever the setup progress changes.
pub struct TerminalSetupEvents;

#[async_trait]
impl SetupEventPort for TerminalSetupEvents {
    async fn emit_setup_progress_changed(&self, progress: SetupProgress) {
        debug!(state = ?progress.state(), "setup progress changed");
        println!("{}", progress_summary(&progress));
    }
}
