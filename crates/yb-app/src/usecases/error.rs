use yb_core::ports::ContractReadError;

/// Failures the dashboard flows can hit.
///
/// None of these reach the caller: each is logged where it happens and the
/// flow falls back to its previous state.
#[derive(Debug, thiserror::Error)]
pub enum FlowFailure {
    #[error("network failure: {0}")]
    NetworkFailure(#[from] ContractReadError),

    #[error("missing precondition: {0}")]
    MissingPrecondition(&'static str),

    #[error("simulated operation failed: {0}")]
    SimulatedOperationFailure(String),
}
