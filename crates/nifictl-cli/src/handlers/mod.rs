//! Command handlers, one module per subcommand.

pub mod clean;
pub mod follow;
pub mod info;
pub mod logs;
pub mod restart;
pub mod start;
pub mod status;
pub mod stop;
