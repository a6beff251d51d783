//! Module provides various helper functionality.

pub mod benchmark;
pub mod check;
pub mod config;
