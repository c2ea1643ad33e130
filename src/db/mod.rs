pub mod connection;
pub mod state_repository;
