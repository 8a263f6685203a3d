pub mod bootstrap;
pub mod config;
pub mod database;
pub mod keyring;
pub mod services;
