pub mod connection;
pub mod store;
