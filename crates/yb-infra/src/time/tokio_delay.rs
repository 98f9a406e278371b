use std::time::Duration;

use tracing::debug;
use yb_core::ports::DelayPort;

/// Simulated on-chain work backed by `tokio::time::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

impl TokioDelay {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl DelayPort for TokioDelay {
    async fn delay(&self, duration: Duration) -> anyhow::Result<()> {
        debug!(?duration, "simulating operation");
        tokio::time::sleep(duration).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, Instant};

    #[tokio::test]
    async fn delay_waits_for_requested_duration() -> anyhow::Result<()> {
        tokio::time::pause();
        let start = Instant::now();

        let handle = tokio::spawn(async { TokioDelay::new().delay(Duration::from_secs(1)).await });
        tokio::task::yield_now().await;
        assert!(!handle.is_finished());

        advance(Duration::from_secs(1)).await;
        handle.await??;
        assert!(start.elapsed() >= Duration::from_secs(1));
        Ok(())
    }
}
