pub mod app;
pub mod cli;
pub mod config;
pub mod models;
pub mod seed;
pub mod store;
