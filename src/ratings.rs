use serde::Deserialize;
use serde_json::Value;

use crate::format::adjusted_line;

/// Display order for the gist: one line per game format, always all five.
pub static GAME_FORMATS: [GameFormat; 5] = [
    GameFormat {
        stats_key: "chess_blitz",
        emoji: "⚡",
        label: "Blitz",
        width: 52,
    },
    GameFormat {
        stats_key: "chess_bullet",
        emoji: "🚅",
        label: "Bullet",
        width: 52,
    },
    GameFormat {
        stats_key: "chess_rapid",
        emoji: "⏲️",
        label: "Rapid",
        width: 53,
    },
    GameFormat {
        stats_key: "tactics",
        emoji: "🧩",
        label: "Tactics",
        width: 52,
    },
    GameFormat {
        stats_key: "chess_daily",
        emoji: "☀️",
        label: "Daily",
        width: 53,
    },
];

pub struct GameFormat {
    pub stats_key: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
    pub width: usize,
}

pub struct TitleAndValue {
    pub title: String,
    pub value: String,
}

/// One game format's slice of the stats payload. Every level is optional
/// and anything that fails to parse degrades to the default, so extraction
/// never fails on a payload of the wrong shape.
#[derive(Debug, Default, Deserialize)]
struct FormatStats {
    last: Option<RatingEntry>,
    highest: Option<RatingEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct RatingEntry {
    rating: Option<i64>,
}

/// Extract the rating line for one game format from the raw stats payload.
pub fn rating_line(game: &GameFormat, stats: &Value) -> TitleAndValue {
    let entry: FormatStats = stats
        .get(game.stats_key)
        .cloned()
        .and_then(|slice| serde_json::from_value(slice).ok())
        .unwrap_or_default();

    // Tactics reports its peak; the game formats report the latest rating.
    let selected = if game.label == "Tactics" {
        entry.highest
    } else {
        entry.last
    };
    let rating = selected.and_then(|entry| entry.rating);

    let value = match rating {
        Some(rating) => format!("{rating} 📈"),
        None => "N/A".to_string(),
    };

    TitleAndValue {
        title: format!("{} {}", game.emoji, game.label),
        value,
    }
}

/// Render the full gist body: five justified lines in display order.
pub fn summary(stats: &Value) -> String {
    GAME_FORMATS
        .iter()
        .map(|game| adjusted_line(&rating_line(game, stats), game.width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn blitz() -> &'static GameFormat {
        &GAME_FORMATS[0]
    }

    fn tactics() -> &'static GameFormat {
        &GAME_FORMATS[3]
    }

    #[test]
    fn game_format_reads_the_last_rating() {
        let stats = json!({"chess_blitz": {"last": {"rating": 1500}}});
        let line = rating_line(blitz(), &stats);
        assert_eq!(line.title, "⚡ Blitz");
        assert_eq!(line.value, "1500 📈");
    }

    #[test]
    fn tactics_reads_the_highest_rating() {
        let stats = json!({"tactics": {"highest": {"rating": 2100}, "last": {"rating": 1800}}});
        assert_eq!(rating_line(tactics(), &stats).value, "2100 📈");
    }

    #[test]
    fn game_format_ignores_the_highest_rating() {
        let stats = json!({"chess_blitz": {"highest": {"rating": 2100}}});
        assert_eq!(rating_line(blitz(), &stats).value, "N/A");
    }

    #[test]
    fn empty_payload_yields_the_sentinel() {
        assert_eq!(rating_line(blitz(), &json!({})).value, "N/A");
    }

    #[test]
    fn null_rating_yields_the_sentinel() {
        let stats = json!({"chess_blitz": {"last": {"rating": null}}});
        assert_eq!(rating_line(blitz(), &stats).value, "N/A");
    }

    #[test]
    fn wrong_shapes_yield_the_sentinel() {
        for stats in [
            json!({"chess_blitz": "closed"}),
            json!({"chess_blitz": {"last": 42}}),
            json!({"chess_blitz": {"last": {"rating": "1500"}}}),
            json!([1, 2, 3]),
            json!(null),
        ] {
            assert_eq!(rating_line(blitz(), &stats).value, "N/A");
        }
    }

    #[test]
    fn zero_rating_counts_as_present() {
        let stats = json!({"chess_blitz": {"last": {"rating": 0}}});
        assert_eq!(rating_line(blitz(), &stats).value, "0 📈");
    }

    #[test]
    fn summary_of_empty_payload_is_five_sentinel_lines_at_width() {
        let lines: Vec<String> = summary(&json!({})).lines().map(String::from).collect();
        assert_eq!(lines.len(), GAME_FORMATS.len());
        for (line, game) in lines.iter().zip(&GAME_FORMATS) {
            assert!(line.starts_with(&format!("{} {}", game.emoji, game.label)));
            assert!(line.ends_with("N/A"));
            assert_eq!(line.chars().count(), game.width);
        }
    }

    #[test]
    fn summary_keeps_display_order_for_partial_payloads() {
        let stats = json!({
            "chess_rapid": {"last": {"rating": 1200}},
            "chess_blitz": {"last": {"rating": 1500}},
        });
        let body = summary(&stats);
        let lines: Vec<&str> = body.lines().collect();
        assert!(lines[0].contains("Blitz") && lines[0].ends_with("1500 📈"));
        assert!(lines[1].contains("Bullet") && lines[1].ends_with("N/A"));
        assert!(lines[2].contains("Rapid") && lines[2].ends_with("1200 📈"));
        assert!(lines[4].contains("Daily"));
    }
}
