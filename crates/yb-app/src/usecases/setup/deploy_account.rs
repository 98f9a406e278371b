//! Step FIRST: deploy the smart account.
//!
//! The wallet signs a deployment message; once a signature is observed the
//! account creation is simulated and the step is reported complete.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, info_span, warn, Instrument};
use yb_core::{
    ports::{DelayPort, SignMessagePort, WalletConnectionPort},
    setup::SetupStepId,
    wallet::{deploy_safe_message, Signature, WalletAccount},
};

use crate::usecases::setup::{SetupOrchestrator, SIMULATED_OPERATION_DELAY};
use crate::usecases::FlowFailure;

/// What a single invocation of [`DeployAccount::execute`] ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// Step FIRST is not the active, incomplete step.
    StepNotActive,
    /// A previous invocation is still in flight.
    Busy,
    /// Wallet was disconnected; the connect flow was opened instead.
    ConnectRequested,
    /// Wallet reports connected but has no address.
    MissingAddress,
    /// The wallet refused to sign.
    SignatureRejected,
    /// A signature was already handled this session.
    AlreadyDeployed,
    /// The simulated creation failed; the step stays incomplete.
    Failed,
    /// The account was "created" and step FIRST completed.
    Deployed,
}

pub struct DeployAccount {
    wallet: Arc<dyn WalletConnectionPort>,
    signer: Arc<dyn SignMessagePort>,
    delay: Arc<dyn DelayPort>,
    orchestrator: Arc<SetupOrchestrator>,
    loading: AtomicBool,
    signature: Mutex<Option<Signature>>,
    // Latch: a signature triggers account creation at most once per session.
    fetched_addresses: AtomicBool,
}

impl DeployAccount {
    pub fn new(
        wallet: Arc<dyn WalletConnectionPort>,
        signer: Arc<dyn SignMessagePort>,
        delay: Arc<dyn DelayPort>,
        orchestrator: Arc<SetupOrchestrator>,
    ) -> Self {
        Self {
            wallet,
            signer,
            delay,
            orchestrator,
            loading: AtomicBool::new(false),
            signature: Mutex::new(None),
            fetched_addresses: AtomicBool::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Last signature the wallet returned, if any.
    pub async fn signature(&self) -> Option<Signature> {
        self.signature.lock().await.clone()
    }

    /// Label for the step's action button.
    pub fn action_label(&self, account: &WalletAccount) -> &'static str {
        if self.is_loading() {
            "Creating Account..."
        } else if !account.is_connected {
            "Connect Wallet"
        } else {
            "Create Smart Account →"
        }
    }

    pub async fn execute(&self) -> DeployOutcome {
        let span = info_span!("usecase.setup.deploy_account");
        async {
            let progress = self.orchestrator.get_progress().await;
            if progress.active_step() != SetupStepId::First
                || progress.step(SetupStepId::First).completed
            {
                return DeployOutcome::StepNotActive;
            }

            let account = self.wallet.account().await;
            if !account.is_connected {
                info!("wallet not connected, opening connect flow");
                if let Err(err) = self.wallet.open_connect_ui().await {
                    warn!(error = %err, "failed to open wallet connect flow");
                }
                return DeployOutcome::ConnectRequested;
            }

            let Some(owner) = account.address else {
                let failure = FlowFailure::MissingPrecondition("wallet address");
                error!(error = %failure, "Wallet address is required to create a smart account.");
                return DeployOutcome::MissingAddress;
            };

            if self
                .loading
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
            {
                return DeployOutcome::Busy;
            }

            let message = deploy_safe_message(&owner);
            info!(owner = %owner, "requesting deployment signature");
            match self.signer.sign_message(&message).await {
                Ok(signature) => {
                    *self.signature.lock().await = Some(signature.clone());
                    self.on_signature(signature).await
                }
                Err(err) => {
                    warn!(error = %err, "deployment signature not granted");
                    self.loading.store(false, Ordering::SeqCst);
                    DeployOutcome::SignatureRejected
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn on_signature(&self, signature: Signature) -> DeployOutcome {
        if self.fetched_addresses.load(Ordering::SeqCst) {
            self.loading.store(false, Ordering::SeqCst);
            return DeployOutcome::AlreadyDeployed;
        }

        self.loading.store(true, Ordering::SeqCst);
        let outcome = match self.delay.delay(SIMULATED_OPERATION_DELAY).await {
            Ok(()) => {
                self.fetched_addresses.store(true, Ordering::SeqCst);
                info!(signature = %signature, "smart account created");
                self.orchestrator.complete_step(SetupStepId::First).await;
                DeployOutcome::Deployed
            }
            Err(err) => {
                let failure = FlowFailure::SimulatedOperationFailure(err.to_string());
                error!(error = %failure, "Error creating smart account");
                DeployOutcome::Failed
            }
        };
        self.loading.store(false, Ordering::SeqCst);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;
    use yb_core::ports::{SetupEventPort, WalletError};
    use yb_core::setup::SetupProgress;
    use yb_core::Address;

    mockall::mock! {
        pub Wallet {}

        #[async_trait]
        impl WalletConnectionPort for Wallet {
            async fn account(&self) -> WalletAccount;
            async fn open_connect_ui(&self) -> Result<(), WalletError>;
        }
    }

    mockall::mock! {
        pub Signer {}

        #[async_trait]
        impl SignMessagePort for Signer {
            async fn sign_message(&self, message: &str) -> Result<Signature, WalletError>;
        }
    }

    struct InstantDelay {
        fail: bool,
    }

    #[async_trait]
    impl DelayPort for InstantDelay {
        async fn delay(&self, _duration: Duration) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("simulated failure");
            }
            Ok(())
        }
    }

    struct NoopEvents;

    #[async_trait]
    impl SetupEventPort for NoopEvents {
        async fn emit_setup_progress_changed(&self, _progress: SetupProgress) {}
    }

    fn owner() -> Address {
        "0xC41CfBcfF3f3D75B8C6d7677f3C14051E03dAb1D".parse().unwrap()
    }

    fn build(
        wallet: MockWallet,
        signer: MockSigner,
        fail_delay: bool,
    ) -> (DeployAccount, Arc<SetupOrchestrator>) {
        let orchestrator = Arc::new(SetupOrchestrator::new(Arc::new(NoopEvents)));
        let executor = DeployAccount::new(
            Arc::new(wallet),
            Arc::new(signer),
            Arc::new(InstantDelay { fail: fail_delay }),
            orchestrator.clone(),
        );
        (executor, orchestrator)
    }

    #[tokio::test]
    async fn disconnected_wallet_opens_connect_flow_only() {
        let mut wallet = MockWallet::new();
        wallet
            .expect_account()
            .returning(WalletAccount::disconnected);
        wallet.expect_open_connect_ui().times(1).returning(|| Ok(()));
        let mut signer = MockSigner::new();
        signer.expect_sign_message().times(0);

        let (executor, orchestrator) = build(wallet, signer, false);

        assert_eq!(executor.execute().await, DeployOutcome::ConnectRequested);
        let progress = orchestrator.get_progress().await;
        assert_eq!(progress, SetupProgress::new());
        assert!(!executor.is_loading());
    }

    #[tokio::test]
    async fn connected_without_address_aborts() {
        let mut wallet = MockWallet::new();
        wallet.expect_account().returning(|| WalletAccount {
            is_connected: true,
            address: None,
        });
        wallet.expect_open_connect_ui().times(0);
        let mut signer = MockSigner::new();
        signer.expect_sign_message().times(0);

        let (executor, orchestrator) = build(wallet, signer, false);

        assert_eq!(executor.execute().await, DeployOutcome::MissingAddress);
        assert!(!orchestrator.get_progress().await.step(SetupStepId::First).completed);
    }

    #[tokio::test]
    async fn signature_completes_first_step() {
        let mut wallet = MockWallet::new();
        wallet
            .expect_account()
            .returning(|| WalletAccount::connected(owner()));
        let mut signer = MockSigner::new();
        signer
            .expect_sign_message()
            .withf(|message| {
                message.to_string() == "Deploy Safe for 0xC41CfBcfF3f3D75B8C6d7677f3C14051E03dAb1D"
            })
            .times(1)
            .returning(|_| Ok(Signature("0xsig".to_string())));

        let (executor, orchestrator) = build(wallet, signer, false);

        assert_eq!(executor.execute().await, DeployOutcome::Deployed);
        let progress = orchestrator.get_progress().await;
        assert!(progress.step(SetupStepId::First).completed);
        assert_eq!(progress.active_step(), SetupStepId::Second);
        assert_eq!(
            executor.signature().await,
            Some(Signature("0xsig".to_string()))
        );
        assert!(!executor.is_loading());
    }

    #[tokio::test]
    async fn second_invocation_after_deploy_is_not_active() {
        let mut wallet = MockWallet::new();
        wallet
            .expect_account()
            .returning(|| WalletAccount::connected(owner()));
        let mut signer = MockSigner::new();
        signer
            .expect_sign_message()
            .times(1)
            .returning(|_| Ok(Signature("0xsig".to_string())));

        let (executor, _orchestrator) = build(wallet, signer, false);

        assert_eq!(executor.execute().await, DeployOutcome::Deployed);
        assert_eq!(executor.execute().await, DeployOutcome::StepNotActive);
    }

    #[tokio::test]
    async fn signature_latch_fires_once() {
        let (executor, orchestrator) = build(MockWallet::new(), MockSigner::new(), false);

        let first = executor.on_signature(Signature("0xa".into())).await;
        let second = executor.on_signature(Signature("0xb".into())).await;

        assert_eq!(first, DeployOutcome::Deployed);
        assert_eq!(second, DeployOutcome::AlreadyDeployed);
        assert_eq!(
            orchestrator.get_progress().await.active_step(),
            SetupStepId::Second
        );
    }

    #[tokio::test]
    async fn rejected_signature_leaves_step_pending() {
        let mut wallet = MockWallet::new();
        wallet
            .expect_account()
            .returning(|| WalletAccount::connected(owner()));
        let mut signer = MockSigner::new();
        signer
            .expect_sign_message()
            .returning(|_| Err(WalletError::Rejected));

        let (executor, orchestrator) = build(wallet, signer, false);

        assert_eq!(executor.execute().await, DeployOutcome::SignatureRejected);
        assert!(!executor.is_loading());
        assert!(!orchestrator.get_progress().await.step(SetupStepId::First).completed);
    }

    #[tokio::test]
    async fn simulated_failure_clears_loading_without_transition() {
        let mut wallet = MockWallet::new();
        wallet
            .expect_account()
            .returning(|| WalletAccount::connected(owner()));
        let mut signer = MockSigner::new();
        signer
            .expect_sign_message()
            .returning(|_| Ok(Signature("0xsig".to_string())));

        let (executor, orchestrator) = build(wallet, signer, true);

        assert_eq!(executor.execute().await, DeployOutcome::Failed);
        assert!(!executor.is_loading());
        assert_eq!(orchestrator.get_progress().await, SetupProgress::new());
    }

    #[test]
    fn action_label_follows_connection_state() {
        let (executor, _) = build(MockWallet::new(), MockSigner::new(), false);

        assert_eq!(
            executor.action_label(&WalletAccount::disconnected()),
            "Connect Wallet"
        );
        assert_eq!(
            executor.action_label(&WalletAccount::connected(owner())),
            "Create Smart Account →"
        );
        executor.loading.store(true, Ordering::SeqCst);
        assert_eq!(
            executor.action_label(&WalletAccount::connected(owner())),
            "Creating Account..."
        );
    }
}
