//! Entry points for each CLI subcommand.
//!
//! Each runner resolves the configuration, wires a fresh [`yb_app::App`] for
//! the session and hands it to the command handlers.

use std::sync::Arc;

use anyhow::Context;
use yb_app::usecases::DepositForm;
use yb_core::config::AppConfig;
use yb_core::ports::WalletConnectionPort;

use super::wiring::{resolve_settings, wire_app, SignatureApproval, WiredApp};
use crate::adapters::TerminalSetupEvents;
use crate::commands::dashboard as dashboard_cmd;
use crate::render::{render_balance, render_dashboard, render_setup_panel, PanelContext};
use crate::session::{run_session, SetupSession};

fn wire(config: &AppConfig, approval: SignatureApproval) -> anyhow::Result<WiredApp> {
    let settings = resolve_settings(config)?;
    wire_app(&settings, approval, Arc::new(TerminalSetupEvents))
        .context("Failed to wire application")
}

/// `dashboard`: read the balance once and print the page with the setup panel.
pub async fn run_dashboard(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let WiredApp { app, .. } = wire(config, SignatureApproval::Auto)?;

    let view = dashboard_cmd::get_dashboard(&app).await;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("Failed to serialize dashboard")?
        );
        return Ok(());
    }

    println!("{}", render_dashboard(&view));
    let account = app.wallet().account().await;
    let form = DepositForm::default();
    println!(
        "{}",
        render_setup_panel(
            &view.setup,
            &PanelContext {
                deploy_label: app.deploy_account().action_label(&account),
                deposit_label: app.deposit_funds().action_label(),
                deposit_enabled: false,
                form: &form,
            },
        )
    );
    Ok(())
}

/// `balance`: print the formatted balance of the configured or given holder.
pub async fn run_balance(config: &AppConfig, holder: Option<&str>) -> anyhow::Result<()> {
    let WiredApp { app, .. } = wire(config, SignatureApproval::Auto)?;

    let (holder, reading) = dashboard_cmd::read_balance(&app, holder)
        .await
        .map_err(anyhow::Error::msg)?;
    println!(
        "{}",
        render_balance(app.balance_reader().token(), holder, &reading)
    );
    Ok(())
}

/// `setup`: interactive session over stdin.
pub async fn run_setup(config: &AppConfig, auto_approve: bool) -> anyhow::Result<()> {
    let approval = if auto_approve {
        SignatureApproval::Auto
    } else {
        SignatureApproval::Prompt
    };
    let WiredApp { app, wallet } = wire(config, approval)?;

    // Mounting the dashboard reads the balance once, as the page does.
    let view = dashboard_cmd::get_dashboard(&app).await;
    let reader = app.balance_reader();
    println!(
        "{}",
        render_balance(reader.token(), reader.holder(), &view.balance)
    );

    run_session(SetupSession::new(app, wallet)).await
}
