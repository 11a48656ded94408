use crate::core::{MatchType, Post, SearchResult};

/// Weight of the provider's 0-100 relevance in the blended score
pub const REMOTE_WEIGHT: f64 = 0.7;
/// Weight of the local substring score in the blended score
pub const LOCAL_WEIGHT: f64 = 0.3;

/// Blended scores at or below this are dropped
pub const REMOTE_INCLUSION_THRESHOLD: u32 = 10;
/// Candidates whose remote call failed need a higher local score
pub const FALLBACK_INCLUSION_THRESHOLD: u32 = 20;

/// One corpus post after semantic scoring was attempted
#[derive(Debug, Clone)]
pub struct SemanticCandidate {
    pub post: Post,
    /// Local score against the original query, 0 when it has no literal match
    pub local_score: u32,
    pub match_type: MatchType,
    /// `None` when the provider call failed for this post
    pub remote_score: Option<u8>,
}

/// `round(0.7 * remote + 0.3 * local)`
pub fn blend_score(remote: u8, local: u32) -> u32 {
    (REMOTE_WEIGHT * f64::from(remote) + LOCAL_WEIGHT * f64::from(local)).round() as u32
}

/// Final score for a candidate, or `None` when it falls under its threshold
pub fn effective_score(candidate: &SemanticCandidate) -> Option<u32> {
    match candidate.remote_score {
        Some(remote) => {
            let score = blend_score(remote, candidate.local_score);
            (score > REMOTE_INCLUSION_THRESHOLD).then_some(score)
        }
        None => (candidate.local_score > FALLBACK_INCLUSION_THRESHOLD)
            .then_some(candidate.local_score),
    }
}

/// Apply thresholds and sort by effective score, keeping corpus order on ties
pub fn blend(candidates: Vec<SemanticCandidate>) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let score = effective_score(&candidate)?;
            Some(SearchResult {
                post: candidate.post,
                relevance_score: score,
                match_type: candidate.match_type,
            })
        })
        .collect();

    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use chrono::Utc;

    fn candidate(id: &str, local: u32, remote: Option<u8>) -> SemanticCandidate {
        SemanticCandidate {
            post: Post::new(id, "t", "s", Category::Discussion, Utc::now()),
            local_score: local,
            match_type: MatchType::Semantic,
            remote_score: remote,
        }
    }

    #[test]
    fn test_blend_score() {
        assert_eq!(blend_score(90, 40), 75);
        assert_eq!(blend_score(0, 0), 0);
        assert_eq!(blend_score(100, 100), 100);
    }

    #[test]
    fn test_thresholds() {
        // 0.7 * 14 = 9.8 → 10, not above the threshold
        assert_eq!(effective_score(&candidate("a", 0, Some(14))), None);
        assert_eq!(effective_score(&candidate("b", 0, Some(16))), Some(11));

        assert_eq!(effective_score(&candidate("c", 20, None)), None);
        assert_eq!(effective_score(&candidate("d", 21, None)), Some(21));
    }

    #[test]
    fn test_blend_orders_and_drops() {
        let results = blend(vec![
            candidate("low", 0, Some(5)),
            candidate("fallback", 150, None),
            candidate("strong", 40, Some(90)),
            candidate("tie", 40, Some(90)),
        ]);

        let ids: Vec<&str> = results.iter().map(|r| r.post.id.as_str()).collect();
        assert_eq!(ids, vec!["fallback", "strong", "tie"]);
        assert_eq!(results[1].relevance_score, 75);
    }
}
