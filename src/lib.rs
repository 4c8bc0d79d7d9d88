pub mod catalog;
pub mod config;
pub mod errors;
pub mod ingestor;
pub mod models;
pub mod sources;
pub mod utils;
