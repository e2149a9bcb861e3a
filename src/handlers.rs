pub mod auth;
pub mod blocks;
pub mod complaints;
pub mod users;
