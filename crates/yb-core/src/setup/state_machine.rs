//! Setup state machine.
//!
//! Defines a pure state transition function for the two-step onboarding flow.

use crate::setup::SetupStepId;

/// Setup flow state.
///
/// 设置流程状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SetupState {
    /// Account deployment is the active step.
    ///
    /// 部署账户步骤进行中。
    FirstActive,
    /// Deposit is the active step.
    ///
    /// 充值步骤进行中。
    SecondActive,
    /// Both steps completed. Terminal.
    ///
    /// 全部完成（终态）。
    AllComplete,
}

/// Events that drive the setup flow.
///
/// 驱动设置流程的事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SetupEvent {
    /// An executor finished the work for a step.
    ///
    /// 执行器完成了某个步骤。
    CompleteStep { step: SetupStepId },
    /// User asked to close the setup panel.
    ///
    /// 用户请求关闭设置面板。
    RequestClose,
    /// User asked to (re)open the setup panel.
    ///
    /// 用户请求打开设置面板。
    RequestOpen,
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SetupAction {
    /// Flip the step's `completed` flag to true.
    MarkStepCompleted { step: SetupStepId },
    /// Present the given step as active.
    ActivateStep { step: SetupStepId },
    /// Make the setup panel visible.
    ShowModal,
    /// Hide the setup panel.
    HideModal,
}

/// Pure setup state machine.
///
/// 纯状态机：不包含副作用。
pub struct SetupStateMachine;

impl SetupStateMachine {
    pub fn transition(state: SetupState, event: SetupEvent) -> (SetupState, Vec<SetupAction>) {
        match (state, event) {
            (
                SetupState::FirstActive,
                SetupEvent::CompleteStep {
                    step: SetupStepId::First,
                },
            ) => (
                SetupState::SecondActive,
                vec![
                    SetupAction::MarkStepCompleted {
                        step: SetupStepId::First,
                    },
                    SetupAction::ActivateStep {
                        step: SetupStepId::Second,
                    },
                ],
            ),
            (
                SetupState::SecondActive,
                SetupEvent::CompleteStep {
                    step: SetupStepId::Second,
                },
            ) => (
                SetupState::AllComplete,
                vec![SetupAction::MarkStepCompleted {
                    step: SetupStepId::Second,
                }],
            ),
            // Closing is only honored once every step is done.
            (SetupState::AllComplete, SetupEvent::RequestClose) => {
                (SetupState::AllComplete, vec![SetupAction::HideModal])
            }
            (state, SetupEvent::RequestOpen) => (state, vec![SetupAction::ShowModal]),
            (state, _event) => (state, Vec::new()),
        }
    }
}
