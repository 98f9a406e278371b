use std::time::Duration;

/// Suspends the calling task.
///
/// Stands in for on-chain work that is simulated with a fixed wait. An `Err`
/// models the simulated operation failing.
#[async_trait::async_trait]
pub trait DelayPort: Send + Sync {
    async fn delay(&self, duration: Duration) -> anyhow::Result<()>;
}
