mod in_memory_wallet;

pub use in_memory_wallet::InMemoryWallet;
