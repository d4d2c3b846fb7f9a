// src/specs/thing.rs
//! Spec for `/thing?id=<id>`.
//!
//! The first `<item>` is the record. Its first `<name>` is the primary name;
//! alternates follow. Missing player counts or playing time read as `0`.

use crate::config::consts::GAME_URL_PREFIX;
use crate::core::{Element, Result};
use crate::engine::types::{Game, GameId};

pub fn query(id: &GameId) -> Vec<(&'static str, String)> {
    vec![("id", id.as_str().to_string())]
}

pub fn first_item(root: &Element) -> Option<&Element> {
    root.children_named("item").next()
}

pub fn game_url(id: &GameId) -> String {
    format!("{GAME_URL_PREFIX}{id}")
}

pub fn player_range(min: i64, max: i64) -> String {
    format!("{min} to {max}")
}

pub fn extract_game(item: &Element, id: &GameId) -> Result<Game> {
    let a = item.accessor();
    let min = a.get_int("minplayers", 0)?;
    let max = a.get_int("maxplayers", 0)?;
    Ok(Game {
        name: a.get_value("name", "").to_string(),
        player_range: player_range(min, max),
        playing_time: a.get_int("playingtime", 0)?,
        url: game_url(id),
    })
}
