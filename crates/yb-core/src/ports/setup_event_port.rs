use crate::setup::SetupProgress;

#[async_trait::async_trait]
pub trait SetupEventPort: Send + Sync {
    async fn emit_setup_progress_changed(&self, progress: SetupProgress);
}
