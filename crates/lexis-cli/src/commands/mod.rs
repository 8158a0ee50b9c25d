//! Command implementations.

pub mod analyze;
pub mod init;

pub use self::analyze::execute_analyze;
pub use self::init::execute_init;
