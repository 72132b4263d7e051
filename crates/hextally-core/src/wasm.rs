//! WebAssembly bindings for the Hextally core.
//!
//! This module exposes board generation and the session statistics to
//! JavaScript through wasm-bindgen, so the web client can run everything
//! locally. Timestamps come in as `Date.now()` milliseconds because the
//! wasm target has no ambient clock.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::board::Board;
#[cfg(feature = "wasm")]
use crate::generate::BoardSize;
#[cfg(feature = "wasm")]
use crate::session::GameSession;
#[cfg(feature = "wasm")]
use crate::{achievements, stats};
#[cfg(feature = "wasm")]
use chrono::{DateTime, Utc};

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
fn parse_now(now_ms: f64) -> Result<DateTime<Utc>, JsValue> {
    DateTime::<Utc>::from_timestamp_millis(now_ms as i64)
        .ok_or_else(|| JsValue::from_str("timestamp out of range"))
}

#[cfg(feature = "wasm")]
fn parse_sessions(sessions_json: &str) -> Result<Vec<GameSession>, JsValue> {
    serde_json::from_str(sessions_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid sessions JSON: {}", e)))
}

/// Generate a board for the given size selector (3 or 5), returned as a
/// JSON array of tiles
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = generateBoard)]
pub fn generate_board(size: u8) -> Result<String, JsValue> {
    let size = BoardSize::try_from(size).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let board = Board::generate(size);
    serde_json::to_string(board.tiles()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compute the leaderboard over a JSON array of sessions
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = leaderboard)]
pub fn leaderboard(sessions_json: &str, now_ms: f64) -> Result<String, JsValue> {
    let sessions = parse_sessions(sessions_json)?;
    let now = parse_now(now_ms)?;
    let standings = stats::leaderboard(&sessions, now);
    serde_json::to_string(&standings).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Ids of the achievements a player has earned, as a JSON array
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = playerAchievements)]
pub fn player_achievements(
    player: &str,
    sessions_json: &str,
    now_ms: f64,
) -> Result<String, JsValue> {
    let sessions = parse_sessions(sessions_json)?;
    let now = parse_now(now_ms)?;
    let earned = achievements::earned(player, &sessions, now);
    serde_json::to_string(&earned).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The full achievement catalog as JSON, for rendering locked/unlocked lists
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = achievementCatalog)]
pub fn achievement_catalog() -> String {
    serde_json::to_string(&achievements::CATALOG).unwrap_or_else(|_| "[]".to_string())
}
