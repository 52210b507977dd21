pub mod api_structs;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod validate;
