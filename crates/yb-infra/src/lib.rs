pub mod fs;
pub mod rpc;
pub mod time;
pub mod wallet;

pub use rpc::AlloyErc20Reader;
pub use time::TokioDelay;
pub use wallet::InMemoryWallet;
