//! Chain access over Ethereum JSON-RPC.

mod erc20_reader;

pub use erc20_reader::AlloyErc20Reader;
