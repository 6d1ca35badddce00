//! Command implementations for bootstrap-cli

pub mod clone;
pub mod dirs;
pub mod env;
pub mod link;
pub mod setup;
pub mod validate;

pub use clone::run_clone_repos;
pub use dirs::run_check_dirs;
pub use env::run_check_env;
pub use link::run_link;
pub use setup::run_setup;
pub use validate::run_validate;
