use std::fmt::Write;

use yb_app::usecases::DashboardView;
use yb_core::dashboard::TransactionStatus;
use yb_core::{Address, BalanceReading, Token};

pub fn render_balance(token: &Token, holder: Address, balance: &BalanceReading) -> String {
    format!("{holder}: {} {}", balance.amount, token.symbol)
}

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();

    let nav = view
        .navigation
        .iter()
        .map(|item| format!("{} ({})", item.name, item.href))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{nav}");
    let _ = writeln!(out);

    let position = &view.position;
    let _ = writeln!(out, "Position value   {}", position.position_value);
    let _ = writeln!(out, "Change           {}", position.percentage_change);
    let _ = writeln!(out, "APY              {}", position.apy);
    let _ = writeln!(out, "Initial deposit  {}", position.initial_deposit);
    let _ = writeln!(out, "Activated        {}", position.activation_date);
    let _ = writeln!(out);

    let _ = writeln!(out, "Active assets");
    for asset in &view.assets {
        let _ = writeln!(out, "  {:<8} {}", asset.symbol, asset.amount);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Agent activity: {}", view.agent_activity);
    let _ = writeln!(out);

    let _ = writeln!(out, "Recent transactions");
    for tx in &view.transactions {
        let status = match tx.status {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
        };
        let _ = writeln!(
            out,
            "  {:<22} {:>12}  {:<15} {}",
            tx.kind, tx.amount, tx.timestamp, status
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use yb_core::dashboard::{
        active_assets, mock_transactions, PositionSummary, AGENT_ACTIVITY, NAVIGATION,
    };
    use yb_core::SetupProgress;

    fn view(balance: &str) -> DashboardView {
        DashboardView {
            navigation: NAVIGATION.to_vec(),
            balance: BalanceReading {
                amount: balance.to_string(),
            },
            position: PositionSummary::mock(balance),
            assets: active_assets("USDC", balance),
            agent_activity: AGENT_ACTIVITY,
            transactions: mock_transactions(),
            setup: SetupProgress::new(),
        }
    }

    #[test]
    fn dashboard_shows_live_balance_in_both_places() {
        let text = render_dashboard(&view("1.5"));

        assert!(text.contains("Position value   $1.5"));
        assert!(text.contains("  USDC     1.5"));
        assert!(text.contains("  stUSDC   245.32"));
        assert!(text.contains("Dashboard (/) | Reporting (/reporting) | Settings (/settings)"));
    }

    #[test]
    fn dashboard_lists_transactions() {
        let text = render_dashboard(&view("0"));

        assert!(text.contains("Yield Optimization"));
        assert!(text.contains("+0.85 USDC"));
        assert_eq!(text.matches("completed").count(), 3);
    }

    #[test]
    fn balance_line_names_symbol() {
        let token = Token::usdc(Address::repeat_byte(0x11));
        let holder = Address::repeat_byte(0x22);

        let line = render_balance(
            &token,
            holder,
            &BalanceReading {
                amount: "12.5".to_string(),
            },
        );

        assert!(line.ends_with(": 12.5 USDC"));
    }
}
