//! Achievement catalog and threshold checks.
//!
//! Achievements are derived entirely from the session history, so there is
//! nothing to persist: re-running the check after a new session is recorded
//! picks up newly earned ones.

use crate::session::GameSession;
use crate::stats;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One achievement in the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Every achievement a player can earn
pub const CATALOG: [Achievement; 9] = [
    Achievement {
        id: "first_game",
        title: "Settler",
        description: "Play your first game.",
        icon: "🛖",
    },
    Achievement {
        id: "first_win",
        title: "First Victory",
        description: "Win 1 game.",
        icon: "🏆",
    },
    Achievement {
        id: "veteran",
        title: "Veteran",
        description: "Play 5 games.",
        icon: "⚔️",
    },
    Achievement {
        id: "master",
        title: "Master of the Table",
        description: "Win 5 games.",
        icon: "👑",
    },
    Achievement {
        id: "hot_streak",
        title: "Unstoppable",
        description: "Win 3 games in a row this month.",
        icon: "🔥",
    },
    Achievement {
        id: "full_table",
        title: "Life of the Party",
        description: "Play a session with 5 or more players.",
        icon: "🥳",
    },
    Achievement {
        id: "duelist",
        title: "Duelist",
        description: "Play a head-to-head session (2 players).",
        icon: "🤺",
    },
    Achievement {
        id: "strategist",
        title: "Strategist",
        description: "Hold a win rate of 50% or better (minimum 3 games).",
        icon: "🧠",
    },
    Achievement {
        id: "regular",
        title: "Old-Timer",
        description: "Play 10 games.",
        icon: "👴",
    },
];

/// Ids of every achievement `player` has earned, in catalog order
pub fn earned(player: &str, sessions: &[GameSession], now: DateTime<Utc>) -> Vec<&'static str> {
    let played: Vec<&GameSession> = sessions.iter().filter(|s| s.includes(player)).collect();
    let games = played.len();
    let wins = played.iter().filter(|s| s.won_by(player)).count();
    let streak = stats::max_win_streak(player, sessions, now);

    CATALOG
        .iter()
        .filter(|a| match a.id {
            "first_game" => games >= 1,
            "first_win" => wins >= 1,
            "veteran" => games >= 5,
            "master" => wins >= 5,
            "hot_streak" => streak >= 3,
            "full_table" => played.iter().any(|s| s.player_count() >= 5),
            "duelist" => played.iter().any(|s| s.player_count() == 2),
            "strategist" => games >= 3 && 2 * wins >= games,
            "regular" => games >= 10,
            _ => false,
        })
        .map(|a| a.id)
        .collect()
}
