use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info_span, warn, Instrument};
use yb_core::{ports::ContractReadPort, Address, BalanceReading, Token};

use crate::usecases::FlowFailure;

/// Reads a holder's token balance and keeps the latest successful reading.
///
/// One instance is shared by every view so they all display the same value.
pub struct BalanceReader {
    contract_reader: Arc<dyn ContractReadPort>,
    token: Token,
    holder: Address,
    latest: RwLock<BalanceReading>,
}

impl BalanceReader {
    pub fn new(contract_reader: Arc<dyn ContractReadPort>, token: Token, holder: Address) -> Self {
        Self {
            contract_reader,
            token,
            holder,
            latest: RwLock::new(BalanceReading::default()),
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn holder(&self) -> Address {
        self.holder
    }

    /// Last successful reading, `"0"` until one completes.
    pub async fn latest(&self) -> BalanceReading {
        self.latest.read().await.clone()
    }

    /// One `balanceOf` read, formatted with the token's decimals.
    pub async fn read_balance(
        &self,
        token: &Token,
        holder: Address,
    ) -> Result<BalanceReading, FlowFailure> {
        let value = self
            .contract_reader
            .balance_of(token.address, holder)
            .await?;
        Ok(BalanceReading::from_base_units(value, token.decimals))
    }

    /// Re-read the configured balance. Failures are logged and the previous
    /// reading is kept.
    pub async fn refresh(&self) -> BalanceReading {
        let span = info_span!(
            "usecase.balance.refresh",
            token = %self.token.address,
            holder = %self.holder,
        );
        async {
            match self.read_balance(&self.token, self.holder).await {
                Ok(reading) => {
                    debug!(amount = %reading.amount, symbol = %self.token.symbol, "balance read");
                    *self.latest.write().await = reading.clone();
                    reading
                }
                Err(err) => {
                    warn!(error = %err, "Error fetching USDC balance");
                    self.latest().await
                }
            }
        }
        .instrument(span)
        .await
    }
}
