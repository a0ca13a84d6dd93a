// src/reply/mod.rs
// Splitting raw generated text into the spoken message and the GIF search
// hint, plus the assembled reply type the caller receives.

use serde::Serialize;

/// Literal delimiter the persona is instructed to end every reply with.
pub const GIF_MARKER: &str = "GIF:";

/// Search query used when the model forgets the marker.
pub const DEFAULT_GIF_QUERY: &str = "confused reaction";

/// A raw reply split at the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    pub message: String,
    pub gif_query: String,
}

/// The unit returned to the caller. Built fresh per request, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub message: String,
    pub gif: String,
    pub audio: Option<String>,
}

/// Split `raw` at the first `GIF:` occurrence, trimming both halves.
///
/// A missing marker means the whole (trimmed) text is the message and the
/// default query stands in. A marker at position 0 leaves the message empty;
/// that is passed through rather than treated as an error.
pub fn parse(raw: &str) -> ParsedReply {
    match raw.split_once(GIF_MARKER) {
        Some((message, query)) => ParsedReply {
            message: message.trim().to_string(),
            gif_query: query.trim().to_string(),
        },
        None => ParsedReply {
            message: raw.trim().to_string(),
            gif_query: DEFAULT_GIF_QUERY.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_marker() {
        let parsed = parse("Sorry I can't help. GIF: confused cat");
        assert_eq!(parsed.message, "Sorry I can't help.");
        assert_eq!(parsed.gif_query, "confused cat");
    }

    #[test]
    fn missing_marker_falls_back_to_default_query() {
        let parsed = parse("  I have absolutely no idea.  ");
        assert_eq!(parsed.message, "I have absolutely no idea.");
        assert_eq!(parsed.gif_query, DEFAULT_GIF_QUERY);
    }

    #[test]
    fn marker_at_start_yields_empty_message() {
        let parsed = parse("GIF: dancing hotdog");
        assert_eq!(parsed.message, "");
        assert_eq!(parsed.gif_query, "dancing hotdog");
    }

    #[test]
    fn only_first_marker_splits() {
        let parsed = parse("One GIF: two GIF: three");
        assert_eq!(parsed.message, "One");
        assert_eq!(parsed.gif_query, "two GIF: three");
    }

    #[test]
    fn trailing_marker_yields_empty_query() {
        let parsed = parse("All done! GIF:");
        assert_eq!(parsed.message, "All done!");
        assert_eq!(parsed.gif_query, "");
    }

    #[test]
    fn parse_is_pure() {
        let raw = "Paris! Wait, is that a country? GIF: confused map";
        assert_eq!(parse(raw), parse(raw));
    }
}
