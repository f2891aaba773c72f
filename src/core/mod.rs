pub mod routes;
pub mod server;

pub use crate::utils::error::Result;
pub use routes::app;
pub use server::GreetServer;
