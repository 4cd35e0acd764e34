pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod responses;
pub mod scheduler;
pub mod state;
pub mod storage;
pub mod writer;
