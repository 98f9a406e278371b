mod reader;

pub use reader::BalanceReader;
