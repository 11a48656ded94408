use chrono::{DateTime, Utc};

use crate::core::{Category, Post};

struct SeedPost {
    id: &'static str,
    title: &'static str,
    show: &'static str,
    season: Option<u32>,
    episode: Option<u32>,
    body: &'static str,
    author: &'static str,
    votes: u32,
    comments: u32,
    timestamp: &'static str,
    category: Category,
}

const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        id: "1",
        title: "Breaking Bad Season 5 Finale Discussion",
        show: "Breaking Bad",
        season: Some(5),
        episode: Some(16),
        body: "What an incredible ending to one of the greatest TV series ever made. Walter White's journey comes full circle.",
        author: "tvfanatic92",
        votes: 245,
        comments: 89,
        timestamp: "2024-01-15T10:30:00Z",
        category: Category::Discussion,
    },
    SeedPost {
        id: "2",
        title: "Stranger Things 4 Theory: Will Byers Connection",
        show: "Stranger Things",
        season: Some(4),
        episode: None,
        body: "I think Will still has a connection to the Upside Down that hasn't been fully explored.",
        author: "hawkinsexplorer",
        votes: 156,
        comments: 67,
        timestamp: "2024-01-14T15:45:00Z",
        category: Category::Theory,
    },
    SeedPost {
        id: "3",
        title: "The Office Best Episodes Ranked",
        show: "The Office",
        season: None,
        episode: None,
        body: "My personal ranking of the top 10 episodes from The Office US version.",
        author: "dundermifflin",
        votes: 89,
        comments: 34,
        timestamp: "2024-01-13T09:20:00Z",
        category: Category::Ranking,
    },
    SeedPost {
        id: "4",
        title: "Game of Thrones Season 8 Retrospective",
        show: "Game of Thrones",
        season: Some(8),
        episode: None,
        body: "Looking back at Season 8 with fresh eyes - was it really that bad?",
        author: "winteriscoming",
        votes: 312,
        comments: 156,
        timestamp: "2024-01-12T18:15:00Z",
        category: Category::Review,
    },
    SeedPost {
        id: "5",
        title: "House of the Dragon vs Game of Thrones",
        show: "House of the Dragon",
        season: Some(1),
        episode: None,
        body: "Comparing the new series to the original - which one do you prefer?",
        author: "dragonrider",
        votes: 198,
        comments: 78,
        timestamp: "2024-01-11T14:30:00Z",
        category: Category::Comparison,
    },
    SeedPost {
        id: "6",
        title: "Wednesday Addams Character Analysis",
        show: "Wednesday",
        season: Some(1),
        episode: None,
        body: "Jenna Ortega's portrayal of Wednesday is absolutely perfect. Let's discuss her character development.",
        author: "nevermore_student",
        votes: 134,
        comments: 45,
        timestamp: "2024-01-10T11:45:00Z",
        category: Category::Analysis,
    },
    SeedPost {
        id: "7",
        title: "The Mandalorian Season 3 Episode 8 Review",
        show: "The Mandalorian",
        season: Some(3),
        episode: Some(8),
        body: "The season finale was epic! Din Djarin's journey continues to amaze.",
        author: "thisIsTheWay",
        votes: 267,
        comments: 92,
        timestamp: "2024-01-09T20:00:00Z",
        category: Category::Review,
    },
    SeedPost {
        id: "8",
        title: "Better Call Saul Ending Explained",
        show: "Better Call Saul",
        season: Some(6),
        episode: Some(13),
        body: "The series finale perfectly wrapped up Jimmy McGill's story. Here's my interpretation.",
        author: "slippinJimmy",
        votes: 189,
        comments: 67,
        timestamp: "2024-01-08T16:30:00Z",
        category: Category::Explanation,
    },
    SeedPost {
        id: "9",
        title: "Friends Reunion Special Thoughts",
        show: "Friends",
        season: None,
        episode: None,
        body: "The reunion brought back so many memories. What did everyone think?",
        author: "centralPerkFan",
        votes: 145,
        comments: 89,
        timestamp: "2024-01-07T13:15:00Z",
        category: Category::Discussion,
    },
    SeedPost {
        id: "10",
        title: "The Last of Us Episode 3 Emotional Impact",
        show: "The Last of Us",
        season: Some(1),
        episode: Some(3),
        body: "Bill and Frank's story was beautifully told. This episode hit different.",
        author: "survivorStory",
        votes: 298,
        comments: 112,
        timestamp: "2024-01-06T19:45:00Z",
        category: Category::Discussion,
    },
    SeedPost {
        id: "11",
        title: "The Bear Season 2 Stress Levels",
        show: "The Bear",
        season: Some(2),
        episode: None,
        body: "This show gives me anxiety in the best way possible. The kitchen chaos is so realistic.",
        author: "chefLife",
        votes: 167,
        comments: 54,
        timestamp: "2024-01-05T12:30:00Z",
        category: Category::Discussion,
    },
    SeedPost {
        id: "12",
        title: "Succession Series Finale Analysis",
        show: "Succession",
        season: Some(4),
        episode: Some(10),
        body: "The Roy family saga ends perfectly. Logan's legacy and the kids' futures.",
        author: "waystarRoyco",
        votes: 234,
        comments: 98,
        timestamp: "2024-01-04T17:20:00Z",
        category: Category::Analysis,
    },
    SeedPost {
        id: "13",
        title: "Euphoria Season 2 Cinematography",
        show: "Euphoria",
        season: Some(2),
        episode: None,
        body: "The visual style of this show is absolutely stunning. Every frame is art.",
        author: "visualArtist",
        votes: 178,
        comments: 43,
        timestamp: "2024-01-03T14:45:00Z",
        category: Category::Technical,
    },
    SeedPost {
        id: "14",
        title: "The Crown Season 6 Historical Accuracy",
        show: "The Crown",
        season: Some(6),
        episode: None,
        body: "How accurate is the portrayal of recent royal events? Let's fact-check.",
        author: "royalWatcher",
        votes: 123,
        comments: 67,
        timestamp: "2024-01-02T10:15:00Z",
        category: Category::Analysis,
    },
    SeedPost {
        id: "15",
        title: "Ozark Series Ending Discussion",
        show: "Ozark",
        season: Some(4),
        episode: Some(14),
        body: "The Byrde family's story concludes. Did they get what they deserved?",
        author: "laundryExpert",
        votes: 201,
        comments: 85,
        timestamp: "2024-01-01T21:30:00Z",
        category: Category::Discussion,
    },
];

/// The bundled demo corpus
pub fn seed_posts() -> Vec<Post> {
    SEED_POSTS
        .iter()
        .map(|seed| {
            // Seed timestamps are literal RFC 3339 strings
            let timestamp = DateTime::parse_from_rfc3339(seed.timestamp)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

            Post::new(seed.id, seed.title, seed.show, seed.category, timestamp)
                .with_episode(seed.season, seed.episode)
                .with_body(seed.body)
                .with_author(seed.author)
                .with_engagement(seed.votes, seed.comments)
        })
        .collect()
}
