//! Shared configuration and logging for the grading workspace.

pub mod config;
pub mod logging;
