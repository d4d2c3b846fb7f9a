// src/config/consts.rs

// Net config
pub const API_ROOT: &str = "https://api.geekdo.com/xmlapi2";
pub const GAME_URL_PREFIX: &str = "https://www.boardgamegeek.com/boardgame/";
pub const USER_AGENT: &str = concat!("bgg_scrape/", env!("CARGO_PKG_VERSION"));

// Catalog queries
pub const SEARCH_ENDPOINT: &str = "search";
pub const THING_ENDPOINT: &str = "thing";
pub const ITEM_TYPE: &str = "boardgame";

// Base-game heuristic: earlier releases are usually older, unrelated games
pub const BASE_GAME_MIN_YEAR: i64 = 2000;

// Be polite: uniform pause after every request
pub const PAUSE_MIN_MS: u64 = 200;
pub const PAUSE_MAX_MS: u64 = 1500;

// Export
pub const HEADERS: [&str; 4] = ["name", "player_range", "playing_time", "url"];
