use std::sync::Arc;

use tokio::sync::Mutex;
use yb_core::setup::SetupProgress;

/// Shared setup context containing progress and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `progress`.
/// - `dispatch_lock`: held for a whole dispatch so transitions apply in order.
/// - `progress`: held briefly for reads and for the final write.
#[derive(Clone)]
pub struct SetupContext {
    progress: Arc<Mutex<SetupProgress>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl Default for SetupContext {
    fn default() -> Self {
        Self::new(SetupProgress::new())
    }
}

impl SetupContext {
    pub fn new(initial: SetupProgress) -> Self {
        Self {
            progress: Arc::new(Mutex::new(initial)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Does NOT acquire `dispatch_lock`.
    pub async fn get_progress(&self) -> SetupProgress {
        self.progress.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Only call while holding `dispatch_lock`.
    pub async fn set_progress(&self, progress: SetupProgress) {
        let mut guard = self.progress.lock().await;
        *guard = progress;
    }
}
