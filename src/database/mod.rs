pub mod connection;
pub mod games;
pub mod matches;
pub mod models;
pub mod players;
pub mod results;
pub mod rounds;
pub mod setup;

pub use connection::{create_pool, get_connection, DbConn, DbPool, MEMORY_PATH};
pub use models::*;
