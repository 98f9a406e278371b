use std::fmt::Write;

use yb_app::usecases::DepositForm;
use yb_core::{SetupProgress, SetupStepId};

/// Executor state the panel needs besides the progress itself.
pub struct PanelContext<'a> {
    pub deploy_label: &'a str,
    pub deposit_label: &'a str,
    pub deposit_enabled: bool,
    pub form: &'a DepositForm,
}

/// `setup: [x] Deploy Safe{Wallet} · [ ] Deposit funds`
pub fn progress_summary(progress: &SetupProgress) -> String {
    let steps = progress
        .steps()
        .iter()
        .map(|step| {
            let mark = if step.completed { 'x' } else { ' ' };
            format!("[{mark}] {}", step.title)
        })
        .collect::<Vec<_>>()
        .join(" · ");
    let visibility = if progress.modal_visible() {
        ""
    } else {
        " (hidden)"
    };
    format!("setup: {steps}{visibility}")
}

pub fn render_setup_panel(progress: &SetupProgress, ctx: &PanelContext<'_>) -> String {
    if !progress.modal_visible() {
        return "Setup panel hidden. Type `open` to show it.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "── Setup ─────────────────────────────");

    for (n, step) in progress.steps().iter().enumerate() {
        let active = progress.active_step() == step.id && !step.completed;
        let mark = if step.completed {
            "✓"
        } else if active {
            "›"
        } else {
            " "
        };
        let _ = writeln!(out, " {mark} {}. {}", n + 1, step.title);
        if !active {
            continue;
        }

        match step.id {
            SetupStepId::First => {
                let _ = writeln!(out, "     [ {} ]  (deploy)", ctx.deploy_label);
            }
            SetupStepId::Second => {
                let chain = ctx
                    .form
                    .selected_chain
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let _ = writeln!(out, "     chain:   {chain}  (chain <ARBITRUM|OPTIMISM|AVALANCHE>)");
                if let Some(address) = ctx.form.deposit_address() {
                    let _ = writeln!(out, "     send to: {address}");
                }
                let amount = if ctx.form.amount.is_empty() {
                    "-"
                } else {
                    ctx.form.amount.as_str()
                };
                let _ = writeln!(out, "     amount:  {amount}  (amount <X>)");
                let hint = if ctx.deposit_enabled {
                    "(deposit)"
                } else {
                    "(select a chain and a valid amount)"
                };
                let _ = writeln!(out, "     [ {} ]  {hint}", ctx.deposit_label);
            }
        }
    }

    if progress.is_dismissible() {
        let _ = writeln!(out, " All set. Type `dismiss` to close.");
    }
    out
}
