// src/engine/mod.rs

pub mod catalog;
pub mod select;
pub mod types;

pub use catalog::Catalog;
