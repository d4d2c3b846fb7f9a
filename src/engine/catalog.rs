// src/engine/catalog.rs
//! Name → catalog id → record.
//!
//! Both entry points fail soft: transport errors, malformed documents and
//! unparseable fields are logged and come back as `None`. Nothing here
//! retries or sleeps; pacing is the caller's job.

use tracing::{debug, info, warn};

use super::select::{most_relevant, pick_base_game};
use super::types::{Game, GameId, SearchOutcome, SearchResult};
use crate::config::consts::{SEARCH_ENDPOINT, THING_ENDPOINT};
use crate::config::options::LookupOptions;
use crate::core::{Result, XmlApi, XmlSource};
use crate::specs::{search, thing};

pub struct Catalog<S> {
    source: S,
}

impl Catalog<XmlApi> {
    /// Catalog backed by the live API described in `opts`.
    pub fn connect(opts: &LookupOptions) -> Result<Self> {
        let api = XmlApi::with_timeout(&opts.api_root, opts.timeout)?;
        Ok(Self::new(api))
    }
}

impl<S: XmlSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// One search call. Errors become [`SearchOutcome::Failed`].
    pub fn query(&self, name: &str, exact: bool) -> SearchOutcome {
        let res = self
            .source
            .fetch(&[SEARCH_ENDPOINT], &search::query(name, exact))
            .and_then(|root| search::parse_items(&root));

        match res {
            Ok(items) => {
                debug!(name, exact, hits = items.len(), "search");
                SearchOutcome::from_results(items)
            }
            Err(e) => {
                warn!(name, exact, error = %e, "search failed, treating as no results");
                SearchOutcome::Failed(e.to_string())
            }
        }
    }

    /// Resolve a free-text name to exactly one catalog id.
    pub fn search(&self, name: &str) -> Option<GameId> {
        self.search_with(name, &mut |_: &str| {})
    }

    /// [`Catalog::search`], passing user-facing status lines to `note`.
    ///
    /// Exact search first; several exact hits pick the newest printing and
    /// skip the fuzzy pass. Only an empty exact search falls back to fuzzy,
    /// where several hits pick the likely base game.
    pub fn search_with(&self, name: &str, note: &mut dyn FnMut(&str)) -> Option<GameId> {
        let exact = self.query(name, true).into_results();
        match exact.as_slice() {
            [only] => return Some(id_of(only)),
            [] => {}
            many => {
                info!(name, hits = many.len(), "several exact matches, picking the newest");
                note(&format!("More than one item found for \"{name}\", picking the newest"));
                return most_relevant(many).map(id_of);
            }
        }

        info!(name, "exact search returned nothing, trying fuzzy search");
        note(&format!("Exact search returned nothing for \"{name}\", trying fuzzy search"));
        let fuzzy = self.query(name, false).into_results();
        let picked = match fuzzy.as_slice() {
            [] => {
                info!(name, "fuzzy search returned nothing, cannot find game");
                return None;
            }
            [only] => only,
            many => {
                info!(name, hits = many.len(), "several fuzzy matches, picking the base game");
                note(&format!("More than one item found for \"{name}\", picking the base game"));
                pick_base_game(name, many)?
            }
        };
        Some(id_of(picked))
    }

    /// Fetch and extract the full record for `id`.
    pub fn describe(&self, id: &GameId) -> Option<Game> {
        self.describe_with(id, &mut |_: &str| {})
    }

    pub fn describe_with(&self, id: &GameId, note: &mut dyn FnMut(&str)) -> Option<Game> {
        let root = match self.source.fetch(&[THING_ENDPOINT], &thing::query(id)) {
            Ok(root) => root,
            Err(e) => {
                warn!(%id, error = %e, "describe failed");
                return None;
            }
        };

        let Some(item) = thing::first_item(&root) else {
            warn!(%id, "ID returns no result");
            note(&format!("ID {id} returns no result"));
            return None;
        };

        match thing::extract_game(item, id) {
            Ok(game) => Some(game),
            Err(e) => {
                warn!(%id, error = %e, "could not read game record");
                None
            }
        }
    }
}

fn id_of(r: &SearchResult) -> GameId {
    GameId(r.id.clone())
}
