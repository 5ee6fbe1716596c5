mod error;
mod extract;
mod handlers;
mod routes;
mod schema;
mod serve;

pub use error::{Error, Result};
pub use serve::serve;
#[cfg(test)]
pub use serve::router_for_tests;
