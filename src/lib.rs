pub mod browse;
pub mod config;
pub mod error;
pub mod models;
pub mod preview;
pub mod search;
pub mod storage;
pub mod utils;
