//! Leaderboard statistics derived from recorded sessions.
//!
//! Everything here is a pure function over a slice of [`GameSession`]s; the
//! caller decides where the sessions come from and what "now" means, which
//! keeps the streak window testable.

use crate::session::GameSession;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Winning streaks only count inside this many days before "now"
pub const STREAK_WINDOW_DAYS: i64 = 30;

/// Aggregated standing for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub name: String,
    /// Sessions won
    pub wins: u32,
    /// Sessions played
    pub total_games: u32,
    /// Win rate as a rounded percentage (0 when no games recorded)
    pub win_rate: u32,
    /// Longest run of consecutive wins inside the streak window
    pub max_streak: u32,
}

/// Compute the leaderboard over all recorded sessions.
///
/// Names are trimmed before aggregation and empty names are skipped. The
/// result is sorted by wins, ties broken by win rate.
pub fn leaderboard(sessions: &[GameSession], now: DateTime<Utc>) -> Vec<PlayerStats> {
    // name -> (wins, total games)
    let mut tallies: HashMap<String, (u32, u32)> = HashMap::new();

    for session in sessions {
        let winner = session.winner.trim();
        if !winner.is_empty() {
            tallies.entry(winner.to_string()).or_default().0 += 1;
        }
        for player in &session.players {
            let player = player.trim();
            if player.is_empty() {
                continue;
            }
            tallies.entry(player.to_string()).or_default().1 += 1;
        }
    }

    let mut standings: Vec<PlayerStats> = tallies
        .into_iter()
        .map(|(name, (wins, total_games))| {
            let win_rate = if total_games > 0 {
                ((wins as f64 / total_games as f64) * 100.0).round() as u32
            } else {
                0
            };
            let max_streak = max_win_streak(&name, sessions, now);
            PlayerStats {
                name,
                wins,
                total_games,
                win_rate,
                max_streak,
            }
        })
        .collect();

    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(b.win_rate.cmp(&a.win_rate)));
    standings
}

/// Longest run of consecutive wins for `player` inside the streak window.
///
/// Sessions are walked in chronological order; a session the player lost
/// resets the run, sessions they sat out do not.
pub fn max_win_streak(player: &str, sessions: &[GameSession], now: DateTime<Utc>) -> u32 {
    let cutoff = now - Duration::days(STREAK_WINDOW_DAYS);

    let mut ordered: Vec<&GameSession> = sessions.iter().collect();
    ordered.sort_by_key(|s| s.played_at);

    let mut current = 0;
    let mut max = 0;
    for session in ordered {
        if session.played_at < cutoff {
            continue;
        }
        if session.players.iter().any(|p| p.trim() == player) {
            if session.winner.trim() == player {
                current += 1;
                max = max.max(current);
            } else {
                current = 0;
            }
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(id: &str, day: u32, players: &[&str], winner: &str) -> GameSession {
        GameSession {
            id: id.into(),
            group_id: None,
            name: format!("session {}", id),
            played_at: Utc.with_ymd_and_hms(2024, 6, day, 20, 0, 0).unwrap(),
            players: players.iter().map(|p| p.to_string()).collect(),
            winner: winner.into(),
            notes: None,
            score_breakdown: None,
            dice_stats: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 28, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_wins_and_totals() {
        let sessions = vec![
            session("1", 10, &["Ana", "Boris"], "Ana"),
            session("2", 11, &["Ana", "Boris"], "Ana"),
            session("3", 12, &["Ana", "Boris", "Clara"], "Boris"),
        ];

        let standings = leaderboard(&sessions, now());

        let ana = standings.iter().find(|s| s.name == "Ana").unwrap();
        assert_eq!(ana.wins, 2);
        assert_eq!(ana.total_games, 3);
        assert_eq!(ana.win_rate, 67);

        let clara = standings.iter().find(|s| s.name == "Clara").unwrap();
        assert_eq!(clara.wins, 0);
        assert_eq!(clara.total_games, 1);
        assert_eq!(clara.win_rate, 0);
    }

    #[test]
    fn test_sorted_by_wins_then_win_rate() {
        let sessions = vec![
            session("1", 10, &["Ana", "Boris", "Clara"], "Ana"),
            session("2", 11, &["Ana", "Boris"], "Boris"),
            session("3", 12, &["Clara", "Dima"], "Clara"),
            session("4", 13, &["Ana", "Clara"], "Clara"),
        ];

        let standings = leaderboard(&sessions, now());
        let names: Vec<&str> = standings.iter().map(|s| s.name.as_str()).collect();

        // Clara leads on wins; Ana and Boris tie at 1 win each and the
        // win-rate tie-break puts Boris (1/2) ahead of Ana (1/3)
        assert_eq!(names, vec!["Clara", "Boris", "Ana", "Dima"]);
    }

    #[test]
    fn test_names_are_trimmed() {
        let sessions = vec![session("1", 10, &["Ana ", " Boris", ""], "Ana ")];
        let standings = leaderboard(&sessions, now());

        assert_eq!(standings.len(), 2);
        let ana = standings.iter().find(|s| s.name == "Ana").unwrap();
        assert_eq!(ana.wins, 1);
        assert_eq!(ana.total_games, 1);
    }

    #[test]
    fn test_streak_resets_on_loss() {
        let sessions = vec![
            session("1", 10, &["Ana", "Boris"], "Ana"),
            session("2", 11, &["Ana", "Boris"], "Ana"),
            session("3", 12, &["Ana", "Boris"], "Boris"),
            session("4", 13, &["Ana", "Boris"], "Ana"),
        ];

        assert_eq!(max_win_streak("Ana", &sessions, now()), 2);
        assert_eq!(max_win_streak("Boris", &sessions, now()), 1);
    }

    #[test]
    fn test_streak_ignores_sessions_outside_window() {
        let mut old = session("1", 1, &["Ana", "Boris"], "Ana");
        old.played_at = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();

        let sessions = vec![
            old,
            session("2", 20, &["Ana", "Boris"], "Ana"),
        ];

        // The January win is outside the 30-day window
        assert_eq!(max_win_streak("Ana", &sessions, now()), 1);
    }

    #[test]
    fn test_streak_unaffected_by_sessions_sat_out() {
        let sessions = vec![
            session("1", 10, &["Ana", "Boris"], "Ana"),
            session("2", 11, &["Boris", "Clara"], "Clara"),
            session("3", 12, &["Ana", "Boris"], "Ana"),
        ];

        assert_eq!(max_win_streak("Ana", &sessions, now()), 2);
    }
}
