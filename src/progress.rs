// src/progress.rs
use crate::engine::types::Game;

/// Why a name produced no row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    /// No catalog entry could be picked for the name.
    NotFound,
    /// An entry was picked but its record could not be fetched or read.
    NoDetails,
}

/// Lightweight progress reporting used by the batch lookup.
/// Frontends implement this to surface status to users; the library never prints.
pub trait Progress {
    /// Called at the start with the number of names.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes (fuzzy fallback, tie-breaks, empty records).
    fn log(&mut self, _msg: &str) {}

    /// Called when a name produced a row.
    fn item_done(&mut self, _name: &str, _game: &Game) {}

    /// Called when a name was skipped.
    fn item_failed(&mut self, _name: &str, _why: Skip) {}

    /// Called at the end, after every name was tried.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
