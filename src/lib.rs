pub mod config;
pub mod core;
pub mod utils;

pub use config::ServerConfig;
pub use core::routes::app;
pub use core::server::GreetServer;
pub use utils::error::{GreetError, Result};
