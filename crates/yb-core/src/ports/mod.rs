//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The wallet, the chain and the clock
//! all sit behind these traits so use cases can be exercised with doubles.

pub mod contract_read;
mod delay;
pub mod errors;
mod setup_event_port;
pub mod wallet;

pub use contract_read::ContractReadPort;
pub use delay::DelayPort;
pub use errors::{ContractReadError, WalletError};
pub use setup_event_port::SetupEventPort;
pub use wallet::{SignMessagePort, WalletConnectionPort};
