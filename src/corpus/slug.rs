/// Hashtag-style show tags whose slug is not derivable from the tag itself
const TAG_SLUGS: [(&str, &str); 4] = [
    ("StrangerThings", "stranger-things"),
    ("SquidGame", "squid-game"),
    ("TheOffice", "the-office"),
    ("BreakingBad", "breaking-bad"),
];

/// URL slug for a show name, e.g. `Grey's Anatomy` → `greys-anatomy`.
///
/// Lowercases, drops everything but ASCII letters, digits, whitespace and
/// dashes, then turns each whitespace/dash run into a single dash.
pub fn show_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug
}

/// Slug for a post tag such as `~BreakingBad`
pub fn slug_from_tag(tag: &str) -> String {
    let clean = tag.strip_prefix('~').unwrap_or(tag);

    TAG_SLUGS
        .iter()
        .find(|(known, _)| *known == clean)
        .map(|(_, slug)| slug.to_string())
        .unwrap_or_else(|| show_slug(clean))
}
