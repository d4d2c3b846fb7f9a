// src/specs/search.rs
//! Spec for `/search`.
//!
//! ```text
//! <items total="2">
//!   <item type="boardgame" id="13">
//!     <name type="primary" value="Catan"/>
//!     <yearpublished value="1995"/>
//!   </item>
//!   ...
//! </items>
//! ```
//! `yearpublished` is missing for undated entries.

use tracing::warn;

use crate::config::consts::ITEM_TYPE;
use crate::core::{Element, Result};
use crate::engine::types::{SearchResult, Year};

pub fn query(name: &str, exact: bool) -> Vec<(&'static str, String)> {
    vec![
        ("query", name.to_string()),
        ("type", ITEM_TYPE.to_string()),
        ("exact", if exact { "1" } else { "0" }.to_string()),
    ]
}

/// Every `<item>` under the root, in document order.
/// Items without an `id` cannot be looked up later and are skipped.
/// A year that isn't a number leaves the item undated.
pub fn parse_items(root: &Element) -> Result<Vec<SearchResult>> {
    let mut out = Vec::new();
    for item in root.children_named("item") {
        let Some(id) = item.attr("id") else {
            warn!("search item without id, skipped");
            continue;
        };
        let a = item.accessor();
        let year = match a.opt_int("yearpublished") {
            Ok(Some(y)) => Year::Known(y),
            Ok(None) => Year::Unknown,
            Err(e) => {
                warn!(id, error = %e, "unreadable year, treating as undated");
                Year::Unknown
            }
        };
        out.push(SearchResult::new(year, a.get_value("name", ""), id));
    }
    Ok(out)
}
