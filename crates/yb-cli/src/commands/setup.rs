//! Setup panel commands.

use std::str::FromStr;

use tracing::{info_span, Instrument};
use yb_app::usecases::{DeployOutcome, DepositForm, DepositOutcome};
use yb_app::App;
use yb_core::{DepositChain, SetupProgress};
use yb_infra::InMemoryWallet;

use crate::commands::map_err;

pub async fn get_progress(app: &App) -> SetupProgress {
    let span = info_span!("command.setup.get_progress");
    async { app.setup_orchestrator().get_progress().await }
        .instrument(span)
        .await
}

/// Finish the wallet connect flow.
pub async fn connect_wallet(wallet: &InMemoryWallet) {
    let span = info_span!("command.setup.connect_wallet");
    async { wallet.connect() }.instrument(span).await
}

pub async fn deploy_account(app: &App) -> DeployOutcome {
    let span = info_span!("command.setup.deploy_account");
    async { app.deploy_account().execute().await }
        .instrument(span)
        .await
}

pub fn select_chain(form: &mut DepositForm, name: &str) -> Result<DepositChain, String> {
    let _span = info_span!("command.setup.select_chain", name).entered();
    let chain = DepositChain::from_str(name).map_err(|e| map_err(e.into()))?;
    form.select_chain(chain);
    Ok(chain)
}

pub fn set_amount(form: &mut DepositForm, amount: &str) {
    let _span = info_span!("command.setup.set_amount", amount).entered();
    form.set_amount(amount.trim());
}

pub async fn deposit_funds(app: &App, form: &DepositForm) -> DepositOutcome {
    let span = info_span!("command.setup.deposit_funds");
    async { app.deposit_funds().execute(form).await }
        .instrument(span)
        .await
}

pub async fn dismiss(app: &App) -> SetupProgress {
    let span = info_span!("command.setup.dismiss");
    async { app.setup_orchestrator().request_close().await }
        .instrument(span)
        .await
}

pub async fn open(app: &App) -> SetupProgress {
    let span = info_span!("command.setup.open");
    async { app.setup_orchestrator().request_open().await }
        .instrument(span)
        .await
}
