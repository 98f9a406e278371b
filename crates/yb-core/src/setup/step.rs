use serde::{Deserialize, Serialize};

/// Identity of an onboarding step.
///
/// 引导步骤标识。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetupStepId {
    /// Deploy the smart account.
    First,
    /// Deposit funds into the deployed account.
    Second,
}

impl SetupStepId {
    /// Both steps in presentation order.
    pub const ALL: [SetupStepId; 2] = [SetupStepId::First, SetupStepId::Second];

    pub fn index(self) -> usize {
        match self {
            SetupStepId::First => 0,
            SetupStepId::Second => 1,
        }
    }

    /// Default display title for the step.
    pub fn title(self) -> &'static str {
        match self {
            SetupStepId::First => "Deploy Safe{Wallet}",
            SetupStepId::Second => "Deposit funds",
        }
    }
}

/// One onboarding task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupStep {
    pub id: SetupStepId,
    pub title: String,
    pub completed: bool,
}

impl SetupStep {
    pub fn pending(id: SetupStepId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            completed: false,
        }
    }
}
