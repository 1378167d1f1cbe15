//! Topic resolution.
//!
//! A configured topic is either free text (`"lofi"`) or the tagged form
//! `"<numeric-id> - <display-name>"` (`"42 - Foo Bar"`).  The tagged form
//! resolves to an exact Wallhaven tag lookup (`id:42`); free text is sent as
//! the search query verbatim (the HTTP client takes care of URL escaping).
//!
//! Resolution is pure — no network, no filesystem.

use regex::Regex;

/// A topic resolved into an API query plus a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicQuery {
    /// The `q` parameter for the search endpoint.
    pub query: String,
    /// Display name used for notifications and local filenames.
    pub label: String,
}

/// Resolve a raw topic string into a [`TopicQuery`].
pub fn resolve(topic: &str) -> TopicQuery {
    // `<id> - <name>` marks a tag id with a display name attached.
    let tag = Regex::new(r"^(\d+)\s*-\s*(.+)$").expect("tag pattern is valid");
    if let Some(caps) = tag.captures(topic) {
        return TopicQuery {
            query: format!("id:{}", &caps[1]),
            label: caps[2].trim().to_string(),
        };
    }
    TopicQuery {
        query: topic.to_string(),
        label: topic.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_topic_resolves_to_id_query() {
        let q = resolve("42 - Foo Bar");
        assert_eq!(q.query, "id:42");
        assert_eq!(q.label, "Foo Bar");
    }

    #[test]
    fn tagged_topic_without_spaces() {
        let q = resolve("1740-Landscapes");
        assert_eq!(q.query, "id:1740");
        assert_eq!(q.label, "Landscapes");
    }

    #[test]
    fn tagged_topic_trims_label() {
        let q = resolve("7 -   deep space   ");
        assert_eq!(q.query, "id:7");
        assert_eq!(q.label, "deep space");
    }

    #[test]
    fn free_text_is_query_and_label() {
        let q = resolve("cats");
        assert_eq!(q.query, "cats");
        assert_eq!(q.label, "cats");
    }

    #[test]
    fn free_text_with_spaces_kept_verbatim() {
        // Escaping happens at the HTTP layer, not here.
        let q = resolve("calm lofi beats");
        assert_eq!(q.query, "calm lofi beats");
        assert_eq!(q.label, "calm lofi beats");
    }

    #[test]
    fn hyphenated_words_are_not_tags() {
        // Only a *numeric* prefix makes a tag.
        let q = resolve("sci-fi");
        assert_eq!(q.query, "sci-fi");
        assert_eq!(q.label, "sci-fi");
    }
}
