pub mod commands;
pub mod infra;
pub mod logic;
pub mod models;
