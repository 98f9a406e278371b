//! Setup orchestrator.
//!
//! This module serializes setup events, runs them through the pure state
//! machine and notifies observers of every change.

use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};
use yb_core::{
    ports::SetupEventPort,
    setup::{SetupEvent, SetupProgress, SetupStepId},
};

use crate::usecases::setup::context::SetupContext;

/// Orchestrator that owns the session's setup progress.
pub struct SetupOrchestrator {
    context: Arc<SetupContext>,
    setup_event_port: Arc<dyn SetupEventPort>,
}

impl SetupOrchestrator {
    pub fn new(setup_event_port: Arc<dyn SetupEventPort>) -> Self {
        Self {
            context: SetupContext::default().arc(),
            setup_event_port,
        }
    }

    pub async fn get_progress(&self) -> SetupProgress {
        self.context.get_progress().await
    }

    /// Report that `step` finished. Out-of-order completions are ignored.
    pub async fn complete_step(&self, step: SetupStepId) -> SetupProgress {
        self.dispatch(SetupEvent::CompleteStep { step }).await
    }

    /// User dismissal. Honored only after both steps completed.
    pub async fn request_close(&self) -> SetupProgress {
        self.dispatch(SetupEvent::RequestClose).await
    }

    pub async fn request_open(&self) -> SetupProgress {
        self.dispatch(SetupEvent::RequestOpen).await
    }

    pub async fn dispatch(&self, event: SetupEvent) -> SetupProgress {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.setup_orchestrator.dispatch", event = ?event);
        async {
            let before = self.context.get_progress().await;
            let mut progress = before.clone();
            let actions = progress.dispatch(event);

            if progress == before {
                debug!(state = ?before.state(), ?actions, "setup event ignored");
                return before;
            }

            info!(
                from = ?before.state(),
                to = ?progress.state(),
                modal_visible = progress.modal_visible(),
                "setup state transition"
            );
            self.context.set_progress(progress.clone()).await;
            self.setup_event_port
                .emit_setup_progress_changed(progress.clone())
                .await;
            progress
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yb_core::setup::SetupState;

    #[derive(Default)]
    struct MockSetupEventPort {
        emitted: tokio::sync::Mutex<Vec<SetupProgress>>,
    }

    impl MockSetupEventPort {
        async fn snapshot(&self) -> Vec<SetupProgress> {
            self.emitted.lock().await.clone()
        }
    }

    #[async_trait::async_trait]
    impl SetupEventPort for MockSetupEventPort {
        async fn emit_setup_progress_changed(&self, progress: SetupProgress) {
            self.emitted.lock().await.push(progress);
        }
    }

    fn build() -> (SetupOrchestrator, Arc<MockSetupEventPort>) {
        let events = Arc::new(MockSetupEventPort::default());
        (SetupOrchestrator::new(events.clone()), events)
    }

    #[tokio::test]
    async fn fresh_orchestrator_reports_initial_progress() {
        let (orchestrator, events) = build();

        let progress = orchestrator.get_progress().await;

        assert_eq!(progress, SetupProgress::new());
        assert!(events.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn completing_steps_emits_each_change() {
        let (orchestrator, events) = build();

        orchestrator.complete_step(SetupStepId::First).await;
        let progress = orchestrator.complete_step(SetupStepId::Second).await;

        assert_eq!(progress.state(), SetupState::AllComplete);
        assert!(progress.modal_visible());
        let emitted = events.snapshot().await;
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0].state(), SetupState::SecondActive);
        assert_eq!(emitted[1].state(), SetupState::AllComplete);
    }

    #[tokio::test]
    async fn ignored_events_are_not_emitted() {
        let (orchestrator, events) = build();

        orchestrator.request_close().await;
        orchestrator.complete_step(SetupStepId::Second).await;
        orchestrator.request_open().await;

        let progress = orchestrator.get_progress().await;
        assert_eq!(progress.active_step(), SetupStepId::First);
        assert!(progress.modal_visible());
        assert!(events.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn dismiss_after_completion_hides_once() {
        let (orchestrator, events) = build();
        orchestrator.complete_step(SetupStepId::First).await;
        orchestrator.complete_step(SetupStepId::Second).await;

        let progress = orchestrator.request_close().await;
        assert!(!progress.modal_visible());

        let progress = orchestrator.request_close().await;
        assert!(!progress.modal_visible());
        assert_eq!(events.snapshot().await.len(), 3);
    }

    #[tokio::test]
    async fn concurrent_completions_apply_once() {
        let (orchestrator, events) = build();
        let orchestrator = Arc::new(orchestrator);

        let a = tokio::spawn({
            let o = orchestrator.clone();
            async move { o.complete_step(SetupStepId::First).await }
        });
        let b = tokio::spawn({
            let o = orchestrator.clone();
            async move { o.complete_step(SetupStepId::First).await }
        });
        a.await.unwrap();
        b.await.unwrap();

        assert_eq!(events.snapshot().await.len(), 1);
        assert_eq!(
            orchestrator.get_progress().await.active_step(),
            SetupStepId::Second
        );
    }
}
