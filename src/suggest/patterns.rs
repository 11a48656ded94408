/// Shows with canned follow-up searches
const KNOWN_SHOWS: [&str; 5] = [
    "Breaking Bad",
    "Stranger Things",
    "The Office",
    "Game of Thrones",
    "House of the Dragon",
];

const GENRE_KEYWORDS: [&str; 5] = ["drama", "comedy", "thriller", "sci-fi", "fantasy"];

/// Post-search suggestions are capped at this many
pub const MAX_PATTERN_SUGGESTIONS: usize = 5;

/// Rule-based completions shown under post search results.
///
/// Generation order is the ranking; nothing is scored.
pub fn pattern_suggestions(query: &str) -> Vec<String> {
    let query = query.trim();
    let lower = query.to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }

    let mut suggestions = Vec::new();

    if lower.contains("season") {
        for suffix in ["finale", "episodes", "review"] {
            suggestions.push(format!("{} {}", query, suffix));
        }
    }

    if lower.contains("episode") {
        for suffix in ["discussion", "recap", "analysis"] {
            suggestions.push(format!("{} {}", query, suffix));
        }
    }

    for show in KNOWN_SHOWS {
        let show_lower = show.to_lowercase();
        if show_lower.contains(&lower) || lower.contains(&show_lower) {
            for suffix in ["theories", "episodes", "characters"] {
                suggestions.push(format!("{} {}", show, suffix));
            }
        }
    }

    for genre in GENRE_KEYWORDS {
        if lower.contains(genre) {
            suggestions.push(format!("best {} shows", genre));
            suggestions.push(format!("{} recommendations", genre));
        }
    }

    suggestions.truncate(MAX_PATTERN_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_suggestions() {
        let suggestions = pattern_suggestions("breaking bad");
        assert_eq!(
            suggestions,
            vec![
                "Breaking Bad theories",
                "Breaking Bad episodes",
                "Breaking Bad characters",
            ]
        );
    }

    #[test]
    fn test_query_containing_show_name() {
        let suggestions = pattern_suggestions("the office christmas");
        assert_eq!(suggestions[0], "The Office theories");
    }

    #[test]
    fn test_season_and_episode_rules_cap_at_five() {
        let suggestions = pattern_suggestions("season 2 episode 3");
        assert_eq!(suggestions.len(), MAX_PATTERN_SUGGESTIONS);
        assert_eq!(suggestions[0], "season 2 episode 3 finale");
        assert_eq!(suggestions[3], "season 2 episode 3 discussion");
    }

    #[test]
    fn test_genre_rules() {
        let suggestions = pattern_suggestions("dark comedy");
        assert_eq!(suggestions, vec!["best comedy shows", "comedy recommendations"]);
    }

    #[test]
    fn test_no_match() {
        assert!(pattern_suggestions("zzz").is_empty());
        assert!(pattern_suggestions("").is_empty());
    }
}
