//! CLI module for hopfield-recall

pub mod commands;
pub mod format;
