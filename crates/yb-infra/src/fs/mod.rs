mod log_dir;

pub use log_dir::{log_dir, log_dir_under};
