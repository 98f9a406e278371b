use std::str::FromStr;

use anyhow::Context;
use tracing::{info_span, warn, Instrument};
use yb_app::usecases::DashboardView;
use yb_app::App;
use yb_core::{Address, BalanceReading};

use crate::commands::map_err;

/// Assemble the dashboard. The first call reads the balance.
pub async fn get_dashboard(app: &App) -> DashboardView {
    let span = info_span!("command.dashboard.get");
    async { app.dashboard().execute().await }
        .instrument(span)
        .await
}

pub async fn refresh_balance(app: &App) -> DashboardView {
    let span = info_span!("command.dashboard.refresh_balance");
    async { app.dashboard().refresh_balance().await }
        .instrument(span)
        .await
}

/// Balance of `holder`, or of the configured holder when `None`.
///
/// A failed read is logged and reported as the previous reading, `"0"` on
/// a fresh session.
pub async fn read_balance(
    app: &App,
    holder: Option<&str>,
) -> Result<(Address, BalanceReading), String> {
    let span = info_span!("command.balance.read", holder = ?holder);
    async {
        let reader = app.balance_reader();
        let Some(raw) = holder else {
            return Ok((reader.holder(), reader.refresh().await));
        };

        let holder = Address::from_str(raw.trim())
            .with_context(|| format!("Invalid holder address: {raw}"))
            .map_err(map_err)?;
        let reading = match reader.read_balance(reader.token(), holder).await {
            Ok(reading) => reading,
            Err(err) => {
                warn!(error = %err, "Error fetching USDC balance");
                BalanceReading::default()
            }
        };
        Ok((holder, reading))
    }
    .instrument(span)
    .await
}
