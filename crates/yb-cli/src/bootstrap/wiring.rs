//! # Dependency Injection
//!
//! Parses the configuration DTO and assembles [`App`] from concrete adapters.
//!
//! ## Prohibited
//!
//! ❌ **No business logic**: nothing here decides what the setup flow does.
//!
//! This is the only place allowed to depend on yb-infra and yb-app at the
//! same time.

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;
use yb_app::{App, AppDeps, BalanceTarget};
use yb_core::config::AppConfig;
use yb_core::ports::{SetupEventPort, SignMessagePort};
use yb_core::token::{MAX_DECIMALS, USDC_DECIMALS};
use yb_core::{Address, Network, Token};
use yb_infra::{AlloyErc20Reader, InMemoryWallet, TokioDelay};

use crate::adapters::{PromptingSigner, TerminalApprovalPrompt};

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("RPC provider initialization failed: {0}")]
    RpcProvider(String),
}

/// Typed view of [`AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub network: Network,
    pub rpc_url: String,
    pub token: Token,
    pub holder: Address,
    pub wallet_address: Option<Address>,
}

fn parse_address(field: &str, value: &str) -> WiringResult<Address> {
    Address::from_str(value.trim())
        .map_err(|e| WiringError::InvalidConfig(format!("{field} `{value}`: {e}")))
}

/// Zero means "unset" and takes the USDC value. Anything above
/// [`MAX_DECIMALS`] cannot be formatted and is rejected.
fn resolve_decimals(raw: i64) -> WiringResult<u8> {
    if raw == 0 {
        return Ok(USDC_DECIMALS);
    }
    u8::try_from(raw)
        .ok()
        .filter(|decimals| *decimals <= MAX_DECIMALS)
        .ok_or_else(|| {
            WiringError::InvalidConfig(format!(
                "token.decimals `{raw}` is outside 0..={MAX_DECIMALS}"
            ))
        })
}

/// Parse the string fields of `config`.
///
/// Empty `rpc_url` takes the network's public endpoint, empty `symbol`
/// and zero `decimals` take the USDC values. Empty `[wallet] address` leaves
/// the local wallet without an address.
pub fn resolve_settings(config: &AppConfig) -> WiringResult<ResolvedSettings> {
    let network = Network::from_str(&config.chain)
        .map_err(|e| WiringError::InvalidConfig(e.to_string()))?;

    let rpc_url = if config.rpc_url.trim().is_empty() {
        network.default_rpc_url().to_string()
    } else {
        config.rpc_url.trim().to_string()
    };

    let token = Token {
        address: parse_address("token.address", &config.token_address)?,
        symbol: if config.token_symbol.is_empty() {
            "USDC".to_string()
        } else {
            config.token_symbol.clone()
        },
        decimals: resolve_decimals(config.token_decimals)?,
    };

    let holder = parse_address("position.holder_address", &config.holder_address)?;
    let wallet_address = if config.wallet_address.trim().is_empty() {
        None
    } else {
        Some(parse_address("wallet.address", &config.wallet_address)?)
    };

    Ok(ResolvedSettings {
        network,
        rpc_url,
        token,
        holder,
        wallet_address,
    })
}

/// How signature requests reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureApproval {
    /// Ask at the terminal before the wallet signs.
    Prompt,
    /// Sign every request.
    Auto,
}

/// Assembled app plus the wallet handle the shell drives directly.
pub struct WiredApp {
    pub app: App,
    pub wallet: Arc<InMemoryWallet>,
}

pub fn wire_app(
    settings: &ResolvedSettings,
    approval: SignatureApproval,
    setup_events: Arc<dyn SetupEventPort>,
) -> WiringResult<WiredApp> {
    let contract_reader = AlloyErc20Reader::connect_http(&settings.rpc_url)
        .map_err(|e| WiringError::RpcProvider(format!("{e:#}")))?;

    let wallet = Arc::new(InMemoryWallet::new(settings.wallet_address));
    let signer: Arc<dyn SignMessagePort> = match approval {
        SignatureApproval::Auto => wallet.clone(),
        SignatureApproval::Prompt => Arc::new(PromptingSigner::new(
            wallet.clone(),
            Arc::new(TerminalApprovalPrompt),
        )),
    };

    info!(
        network = %settings.network,
        chain_id = settings.network.chain_id(),
        rpc_url = %settings.rpc_url,
        token = %settings.token.address,
        holder = %settings.holder,
        ?approval,
        "wiring application"
    );

    let app = App::new(AppDeps {
        contract_reader: Arc::new(contract_reader),
        balance_target: BalanceTarget {
            token: settings.token.clone(),
            holder: settings.holder,
        },
        wallet: wallet.clone(),
        signer,
        delay: Arc::new(TokioDelay::new()),
        setup_events,
    });

    Ok(WiredApp { app, wallet })
}

#[cfg(test)]
mod tests {
    use super::*;
    use yb_core::ports::WalletConnectionPort;

    #[test]
    fn defaults_resolve_to_arbitrum_usdc() {
        let settings = resolve_settings(&AppConfig::with_defaults()).unwrap();

        assert_eq!(settings.network, Network::Arbitrum);
        assert_eq!(settings.rpc_url, "https://arb1.arbitrum.io/rpc");
        assert_eq!(settings.token.decimals, 6);
        assert_eq!(settings.token.symbol, "USDC");
        assert_eq!(settings.wallet_address, Some(settings.holder));
    }

    #[test]
    fn empty_rpc_url_uses_network_default() {
        let mut config = AppConfig::with_defaults();
        config.chain = "optimism".to_string();
        config.rpc_url = String::new();

        let settings = resolve_settings(&config).unwrap();

        assert_eq!(settings.rpc_url, Network::Optimism.default_rpc_url());
    }

    #[test]
    fn unknown_chain_is_invalid_config() {
        let mut config = AppConfig::with_defaults();
        config.chain = "solana".to_string();

        let err = resolve_settings(&config).unwrap_err();

        assert!(matches!(err, WiringError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_holder_names_the_field() {
        let mut config = AppConfig::with_defaults();
        config.holder_address = "0x1234".to_string();

        let err = resolve_settings(&config).unwrap_err();

        assert!(err.to_string().contains("position.holder_address"));
    }

    #[test]
    fn zero_decimals_fall_back_to_usdc() {
        let mut config = AppConfig::with_defaults();
        config.token_decimals = 0;

        let settings = resolve_settings(&config).unwrap();

        assert_eq!(settings.token.decimals, USDC_DECIMALS);
    }

    #[test]
    fn eighteen_decimals_are_kept() {
        let mut config = AppConfig::with_defaults();
        config.token_decimals = 18;

        let settings = resolve_settings(&config).unwrap();

        assert_eq!(settings.token.decimals, 18);
    }

    #[test]
    fn out_of_range_decimals_are_invalid_config() {
        for raw in [78, 256, 262, -6] {
            let mut config = AppConfig::with_defaults();
            config.token_decimals = raw;

            let err = resolve_settings(&config).unwrap_err();

            assert!(
                matches!(err, WiringError::InvalidConfig(ref msg) if msg.contains("token.decimals")),
                "decimals = {raw} gave {err}"
            );
        }
    }

    #[test]
    fn largest_formattable_decimals_are_accepted() {
        let mut config = AppConfig::with_defaults();
        config.token_decimals = i64::from(MAX_DECIMALS);

        let settings = resolve_settings(&config).unwrap();

        assert_eq!(settings.token.decimals, MAX_DECIMALS);
    }

    #[test]
    fn empty_wallet_address_leaves_wallet_without_address() {
        let mut config = AppConfig::with_defaults();
        config.wallet_address = String::new();

        let settings = resolve_settings(&config).unwrap();

        assert_eq!(settings.wallet_address, None);
    }

    #[tokio::test]
    async fn wire_app_builds_with_auto_approval() {
        struct NoopEvents;

        #[async_trait::async_trait]
        impl SetupEventPort for NoopEvents {
            async fn emit_setup_progress_changed(&self, _progress: yb_core::SetupProgress) {}
        }

        let settings = resolve_settings(&AppConfig::with_defaults()).unwrap();
        let wired = wire_app(&settings, SignatureApproval::Auto, Arc::new(NoopEvents)).unwrap();

        let account = wired.app.wallet().account().await;
        assert!(!account.is_connected);
        assert_eq!(wired.app.balance_reader().holder(), settings.holder);
    }

    #[test]
    fn malformed_rpc_url_fails_wiring() {
        struct NoopEvents;

        #[async_trait::async_trait]
        impl SetupEventPort for NoopEvents {
            async fn emit_setup_progress_changed(&self, _progress: yb_core::SetupProgress) {}
        }

        let mut config = AppConfig::with_defaults();
        config.rpc_url = "arb1 rpc".to_string();
        let settings = resolve_settings(&config).unwrap();

        let err = wire_app(&settings, SignatureApproval::Auto, Arc::new(NoopEvents))
            .err()
            .unwrap();

        assert!(matches!(err, WiringError::RpcProvider(ref msg) if msg.contains("arb1 rpc")));
    }
}
