//! Interactive setup session.
//!
//! One line of input is one command. The session owns the deposit form and
//! drives the shared [`App`] through the setup command handlers.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::warn;
use yb_app::usecases::{DeployOutcome, DepositForm, DepositOutcome};
use yb_app::App;
use yb_core::ports::WalletConnectionPort;
use yb_infra::InMemoryWallet;

use crate::commands::setup as cmd;
use crate::render::{render_setup_panel, PanelContext};

const HELP: &str = "\
commands:
  connect            finish connecting the wallet
  deploy             create the smart account (step 1)
  chain <NAME>       ARBITRUM | OPTIMISM | AVALANCHE
  amount <X>         USDC amount to deposit
  deposit            transfer the deposit (step 2)
  dismiss            close the panel (once both steps are done)
  open               reopen the panel
  status             show the panel
  balance            re-read the USDC balance
  quit               leave the session";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionReply {
    Continue(String),
    Quit,
}

pub struct SetupSession {
    app: App,
    wallet: Arc<InMemoryWallet>,
    form: DepositForm,
}

impl SetupSession {
    pub fn new(app: App, wallet: Arc<InMemoryWallet>) -> Self {
        Self {
            app,
            wallet,
            form: DepositForm::default(),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Render the panel for the current progress.
    pub async fn panel(&self) -> String {
        let progress = cmd::get_progress(&self.app).await;
        let account = self.app.wallet().account().await;
        let deploy = self.app.deploy_account();
        let deposit = self.app.deposit_funds();
        render_setup_panel(
            &progress,
            &PanelContext {
                deploy_label: deploy.action_label(&account),
                deposit_label: deposit.action_label(),
                deposit_enabled: deposit.can_submit(&self.form),
                form: &self.form,
            },
        )
    }

    pub async fn handle(&mut self, line: &str) -> SessionReply {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return SessionReply::Continue(String::new());
        };
        let argument = parts.collect::<Vec<_>>().join(" ");

        let message = match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return SessionReply::Quit,
            "help" => HELP.to_string(),
            "status" => String::new(),
            "balance" => {
                let view = crate::commands::dashboard::refresh_balance(&self.app).await;
                format!("Balance: {}", view.position.position_value)
            }
            "connect" => {
                cmd::connect_wallet(&self.wallet).await;
                "Wallet connected.".to_string()
            }
            "deploy" => deploy_message(cmd::deploy_account(&self.app).await).to_string(),
            "chain" => match cmd::select_chain(&mut self.form, &argument) {
                Ok(chain) => format!("Chain set to {chain}."),
                Err(err) => err,
            },
            "amount" => {
                cmd::set_amount(&mut self.form, &argument);
                if self.form.parsed_amount().is_some() {
                    format!("Amount set to {}.", self.form.amount)
                } else {
                    "Amount must be a positive number with at most 6 decimals.".to_string()
                }
            }
            "deposit" => deposit_message(cmd::deposit_funds(&self.app, &self.form).await).to_string(),
            "dismiss" => {
                let progress = cmd::dismiss(&self.app).await;
                if progress.modal_visible() {
                    "Finish both steps before closing the panel.".to_string()
                } else {
                    String::new()
                }
            }
            "open" => {
                cmd::open(&self.app).await;
                String::new()
            }
            other => format!("Unknown command `{other}`. Type `help`."),
        };

        let panel = self.panel().await;
        let reply = if message.is_empty() {
            panel
        } else {
            format!("{message}\n{panel}")
        };
        SessionReply::Continue(reply)
    }
}

fn deploy_message(outcome: DeployOutcome) -> &'static str {
    match outcome {
        DeployOutcome::Deployed => "Smart account created.",
        DeployOutcome::ConnectRequested => "Wallet connect requested. Type `connect` to finish.",
        DeployOutcome::MissingAddress => {
            "Wallet address is required to create a smart account."
        }
        DeployOutcome::SignatureRejected => "Signature was not granted.",
        DeployOutcome::AlreadyDeployed => "Smart account already created.",
        DeployOutcome::Failed => "Error creating smart account.",
        DeployOutcome::Busy => "Account creation already in progress.",
        DeployOutcome::StepNotActive => "Step 1 is not active.",
    }
}

fn deposit_message(outcome: DepositOutcome) -> &'static str {
    match outcome {
        DepositOutcome::Transferred => "Transfer complete.",
        DepositOutcome::Incomplete => "Select a chain and enter a valid amount first.",
        DepositOutcome::StepNotActive => "Step 2 is not active.",
        DepositOutcome::Busy => "Transfer already in progress.",
        DepositOutcome::Failed => "Error processing transfer.",
    }
}

async fn read_line() -> io::Result<Option<String>> {
    tokio::task::spawn_blocking(|| -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "> ")?;
        stdout.flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    })
    .await
    .map_err(io::Error::other)?
}

/// Read commands from stdin until `quit` or end of input.
pub async fn run_session(mut session: SetupSession) -> anyhow::Result<()> {
    println!("{}", session.panel().await);
    println!("Type `help` for commands.");

    while let Some(line) = read_line().await? {
        match session.handle(&line).await {
            SessionReply::Quit => break,
            SessionReply::Continue(reply) if reply.is_empty() => {}
            SessionReply::Continue(reply) => println!("{reply}"),
        }
    }

    if !session.app().setup_orchestrator().get_progress().await.all_completed() {
        warn!("setup session ended before both steps completed");
    }
    Ok(())
}
