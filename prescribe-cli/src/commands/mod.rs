//! Command implementations for the prescribe CLI

pub mod table;
pub mod distance;
pub mod replay;
pub mod config;
