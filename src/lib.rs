// src/lib.rs

pub mod config;
pub mod core;
pub mod engine;
pub mod specs;

pub mod file;
pub mod log;
pub mod progress;
pub mod runner;
pub mod throttle;

#[cfg(feature = "cli")]
pub mod cli;

pub use engine::Catalog;
pub use engine::types::{Game, GameId, SearchOutcome, SearchResult, Year};
