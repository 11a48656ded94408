use crate::core::{Suggestion, SuggestionMetadata, SuggestionType};

/// Typeahead lists are capped at this many
pub const MAX_TYPEAHEAD_SUGGESTIONS: usize = 12;

const SHOW_CONFIDENCE: f64 = 0.95;
const ACTOR_CONFIDENCE: f64 = 0.90;
const CHARACTER_CONFIDENCE: f64 = 0.85;
const GENRE_CONFIDENCE: f64 = 0.80;
const TOPIC_CONFIDENCE: f64 = 0.75;
const PATTERN_CONFIDENCE: f64 = 0.70;

struct ShowEntry {
    name: &'static str,
    genre: &'static str,
    years: &'static str,
    network: &'static str,
}

struct ActorEntry {
    name: &'static str,
    known_for: &'static str,
}

struct CharacterEntry {
    name: &'static str,
    show: &'static str,
}

const SHOWS: &[ShowEntry] = &[
    ShowEntry { name: "Breaking Bad", genre: "Crime Drama", years: "2008-2013", network: "AMC" },
    ShowEntry { name: "Stranger Things", genre: "Sci-Fi Horror", years: "2016-2025", network: "Netflix" },
    ShowEntry { name: "The Office", genre: "Comedy", years: "2005-2013", network: "NBC" },
    ShowEntry { name: "Game of Thrones", genre: "Fantasy Drama", years: "2011-2019", network: "HBO" },
    ShowEntry { name: "House of the Dragon", genre: "Fantasy Drama", years: "2022-", network: "HBO" },
    ShowEntry { name: "Wednesday", genre: "Comedy Horror", years: "2022-", network: "Netflix" },
    ShowEntry { name: "The Mandalorian", genre: "Sci-Fi Adventure", years: "2019-", network: "Disney+" },
    ShowEntry { name: "Better Call Saul", genre: "Crime Drama", years: "2015-2022", network: "AMC" },
    ShowEntry { name: "Friends", genre: "Sitcom", years: "1994-2004", network: "NBC" },
    ShowEntry { name: "The Last of Us", genre: "Post-Apocalyptic Drama", years: "2023-", network: "HBO" },
    ShowEntry { name: "The Bear", genre: "Comedy Drama", years: "2022-", network: "FX" },
    ShowEntry { name: "Succession", genre: "Drama", years: "2018-2023", network: "HBO" },
    ShowEntry { name: "Euphoria", genre: "Teen Drama", years: "2019-", network: "HBO" },
    ShowEntry { name: "The Crown", genre: "Historical Drama", years: "2016-2023", network: "Netflix" },
    ShowEntry { name: "Ozark", genre: "Crime Drama", years: "2017-2022", network: "Netflix" },
];

const ACTORS: &[ActorEntry] = &[
    ActorEntry { name: "Bryan Cranston", known_for: "Breaking Bad, Malcolm in the Middle" },
    ActorEntry { name: "Millie Bobby Brown", known_for: "Stranger Things, Enola Holmes" },
    ActorEntry { name: "Pedro Pascal", known_for: "The Mandalorian, The Last of Us" },
    ActorEntry { name: "Jenna Ortega", known_for: "Wednesday, You" },
    ActorEntry { name: "Emilia Clarke", known_for: "Game of Thrones" },
    ActorEntry { name: "Bob Odenkirk", known_for: "Better Call Saul, Breaking Bad" },
    ActorEntry { name: "Steve Carell", known_for: "The Office" },
    ActorEntry { name: "Jennifer Aniston", known_for: "Friends" },
    ActorEntry { name: "Zendaya", known_for: "Euphoria, Spider-Man" },
    ActorEntry { name: "Jeremy Strong", known_for: "Succession" },
    ActorEntry { name: "Claire Foy", known_for: "The Crown" },
    ActorEntry { name: "Jason Bateman", known_for: "Ozark, Arrested Development" },
];

const CHARACTERS: &[CharacterEntry] = &[
    CharacterEntry { name: "Walter White", show: "Breaking Bad" },
    CharacterEntry { name: "Eleven", show: "Stranger Things" },
    CharacterEntry { name: "Jon Snow", show: "Game of Thrones" },
    CharacterEntry { name: "Wednesday Addams", show: "Wednesday" },
    CharacterEntry { name: "Din Djarin", show: "The Mandalorian" },
    CharacterEntry { name: "Saul Goodman", show: "Better Call Saul" },
    CharacterEntry { name: "Michael Scott", show: "The Office" },
    CharacterEntry { name: "Daenerys Targaryen", show: "Game of Thrones" },
];

const GENRES: &[&str] = &[
    "Drama", "Comedy", "Sci-Fi", "Fantasy", "Horror", "Crime", "Thriller", "Romance", "Action",
    "Adventure", "Mystery", "Documentary", "Animation", "Historical", "Teen", "Sitcom",
    "Anthology", "Miniseries",
];

const TOPICS: &[&str] = &[
    "season finale",
    "character development",
    "plot theories",
    "easter eggs",
    "behind the scenes",
    "cast interviews",
    "episode reviews",
    "fan theories",
    "show recommendations",
    "similar shows",
    "best episodes",
    "worst episodes",
];

/// Local typeahead over the fixed reference tables.
///
/// Entries are included when the query is a case-insensitive substring of
/// their name (topics match in either direction), stably sorted by category
/// confidence and capped at [`MAX_TYPEAHEAD_SUGGESTIONS`].
pub fn local_suggestions(query: &str) -> Vec<Suggestion> {
    let query = query.trim();
    let lower = query.to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }

    let mut suggestions = Vec::new();

    for show in SHOWS.iter().filter(|s| s.name.to_lowercase().contains(&lower)) {
        suggestions.push(
            Suggestion::new(show.name, SuggestionType::TvShow, SHOW_CONFIDENCE)
                .with_description(format!("{} • {} • {}", show.genre, show.years, show.network))
                .with_metadata(SuggestionMetadata {
                    year: Some(show.years.to_string()),
                    network: Some(show.network.to_string()),
                    genre: Some(show.genre.to_string()),
                    role: None,
                }),
        );
    }

    for actor in ACTORS.iter().filter(|a| a.name.to_lowercase().contains(&lower)) {
        suggestions.push(
            Suggestion::new(actor.name, SuggestionType::Actor, ACTOR_CONFIDENCE)
                .with_description(format!("Known for: {}", actor.known_for))
                .with_metadata(SuggestionMetadata {
                    role: Some(actor.known_for.to_string()),
                    ..SuggestionMetadata::default()
                }),
        );
    }

    for character in CHARACTERS.iter().filter(|c| c.name.to_lowercase().contains(&lower)) {
        suggestions.push(
            Suggestion::new(character.name, SuggestionType::Character, CHARACTER_CONFIDENCE)
                .with_description(format!("Character from {}", character.show))
                .with_metadata(SuggestionMetadata {
                    role: Some(character.show.to_string()),
                    ..SuggestionMetadata::default()
                }),
        );
    }

    for genre in GENRES.iter().filter(|g| g.to_lowercase().contains(&lower)) {
        suggestions.push(
            Suggestion::new(format!("{} TV Shows", genre), SuggestionType::Genre, GENRE_CONFIDENCE)
                .with_description(format!(
                    "Browse {} series and discussions",
                    genre.to_lowercase()
                )),
        );
    }

    for topic in TOPICS
        .iter()
        .filter(|t| t.contains(lower.as_str()) || lower.contains(*t))
    {
        suggestions.push(
            Suggestion::new(format!("{} {}", query, topic), SuggestionType::Topic, TOPIC_CONFIDENCE)
                .with_description(format!("Discussions about {}", topic)),
        );
    }

    if lower.contains("season") || lower.contains("episode") {
        suggestions.push(
            Suggestion::new(format!("{} discussions", query), SuggestionType::Topic, PATTERN_CONFIDENCE)
                .with_description("Episode discussions and reviews"),
        );
    }

    if lower.contains("theory") || lower.contains("ending") {
        suggestions.push(
            Suggestion::new(format!("{} theories", query), SuggestionType::Topic, PATTERN_CONFIDENCE)
                .with_description("Fan theories and analysis"),
        );
    }

    // Stable sort: within a confidence band, table order is kept
    suggestions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions.truncate(MAX_TYPEAHEAD_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_match() {
        let suggestions = local_suggestions("breaking");
        assert_eq!(suggestions[0].text, "Breaking Bad");
        assert_eq!(suggestions[0].kind, SuggestionType::TvShow);
        assert_eq!(
            suggestions[0].description.as_deref(),
            Some("Crime Drama • 2008-2013 • AMC")
        );
    }

    #[test]
    fn test_sorted_by_category_confidence() {
        // "wednesday" hits a show, a character and the actor's known-for is not searched
        let suggestions = local_suggestions("wednesday");
        let kinds: Vec<SuggestionType> = suggestions.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SuggestionType::TvShow, SuggestionType::Character]);
    }

    #[test]
    fn test_topics_match_both_directions() {
        let forward = local_suggestions("finale");
        assert!(forward.iter().any(|s| s.text == "finale season finale"));

        let backward = local_suggestions("best episodes of friends");
        assert!(backward
            .iter()
            .any(|s| s.text == "best episodes of friends best episodes"));
        assert!(backward
            .iter()
            .any(|s| s.text == "best episodes of friends discussions"));
    }

    #[test]
    fn test_cap_and_order() {
        // "e" is in nearly every table entry
        let suggestions = local_suggestions("e");
        assert_eq!(suggestions.len(), MAX_TYPEAHEAD_SUGGESTIONS);
        assert!(suggestions
            .windows(2)
            .all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn test_no_match() {
        assert!(local_suggestions("qqqq").is_empty());
    }
}
