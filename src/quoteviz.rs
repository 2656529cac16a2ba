//! Main module for quoteviz library functionality

pub mod ast;
pub mod classify;
pub mod config;
pub mod error;
pub mod formats;
pub mod loader;
pub mod printing;
pub mod stats;
