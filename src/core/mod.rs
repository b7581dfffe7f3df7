pub mod app;
pub mod config;
pub mod input;
pub mod query_service;
pub mod session;
pub mod text_wrapping;
