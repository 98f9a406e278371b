//! Process-local onboarding progress.
//!
//! `SetupProgress` is created fresh for every session and is never persisted.
//! Fields are private so the only way to mutate it is through
//! [`SetupProgress::dispatch`], which routes every change through
//! [`SetupStateMachine`].

use serde::Serialize;

use crate::setup::{SetupAction, SetupEvent, SetupState, SetupStateMachine, SetupStep, SetupStepId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupProgress {
    active_step: SetupStepId,
    steps: [SetupStep; 2],
    modal_visible: bool,
}

impl Default for SetupProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupProgress {
    /// Fresh session: step FIRST active, nothing completed, panel forced open.
    pub fn new() -> Self {
        Self {
            active_step: SetupStepId::First,
            steps: [
                SetupStep::pending(SetupStepId::First),
                SetupStep::pending(SetupStepId::Second),
            ],
            modal_visible: true,
        }
    }

    pub fn active_step(&self) -> SetupStepId {
        self.active_step
    }

    pub fn steps(&self) -> &[SetupStep] {
        &self.steps
    }

    pub fn step(&self, id: SetupStepId) -> &SetupStep {
        &self.steps[id.index()]
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn all_completed(&self) -> bool {
        self.steps.iter().all(|step| step.completed)
    }

    /// Whether a close request would currently be honored.
    pub fn is_dismissible(&self) -> bool {
        self.all_completed()
    }

    /// Current machine state, derived from the step flags.
    pub fn state(&self) -> SetupState {
        if self.all_completed() {
            SetupState::AllComplete
        } else if self.active_step == SetupStepId::Second {
            SetupState::SecondActive
        } else {
            SetupState::FirstActive
        }
    }

    /// Run `event` through the state machine and apply the resulting actions.
    ///
    /// Returns the actions that were applied; an empty vector means the
    /// event was ignored.
    pub fn dispatch(&mut self, event: SetupEvent) -> Vec<SetupAction> {
        let (_next, actions) = SetupStateMachine::transition(self.state(), event);
        for action in &actions {
            self.apply(*action);
        }
        actions
    }

    fn apply(&mut self, action: SetupAction) {
        match action {
            SetupAction::MarkStepCompleted { step } => {
                self.steps[step.index()].completed = true;
            }
            SetupAction::ActivateStep { step } => {
                self.active_step = step;
            }
            SetupAction::ShowModal => {
                self.modal_visible = true;
            }
            SetupAction::HideModal => {
                if self.all_completed() {
                    self.modal_visible = false;
                }
            }
        }
    }
}
