// src/specs/mod.rs
//! # Catalog response "specs"
//!
//! One module per endpoint of the XML API. Each spec knows two things:
//! which query parameters the endpoint takes, and how to read the returned
//! document into typed values.
//!
//! ## What lives here
//! - **Query shaping** for `search` and `thing`.
//! - **Tolerant extraction** through `core::xml::Accessor`: a missing field
//!   falls back to a default, only a non-numeric integer field is an error.
//!
//! ## What does **not** live here
//! - Networking, retries of any kind, pausing between calls (see `catalog`, `throttle`).
//! - Choosing between several hits (see `engine::select`).
//!
//! Specs are pure and are tested offline against inlined sample documents.
pub mod search;
pub mod thing;
