//! External service clients

pub mod user_client;
