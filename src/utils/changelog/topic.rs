// topic markers

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

static PUBLIC_MARKER: LazyLock<Regex> = LazyLock::new(|| marker_regex(Topic::Public));
static PRIVATE_MARKER: LazyLock<Regex> = LazyLock::new(|| marker_regex(Topic::Private));

/// visibility of a changelog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Public,
    Private,
}

impl Topic {
    /// render order of the topic sections
    pub const ALL: [Topic; 2] = [Topic::Public, Topic::Private];

    pub fn name(&self) -> &'static str {
        match self {
            Topic::Public => "Public",
            Topic::Private => "Private",
        }
    }

    fn marker(&self) -> &'static Regex {
        match self {
            Topic::Public => &PUBLIC_MARKER,
            Topic::Private => &PRIVATE_MARKER,
        }
    }

    /// check if the line carries a marker for this topic, e.g. `# Private:`
    pub fn is_marked(&self, line: &str) -> bool {
        self.marker().is_match(line)
    }

    /// remove every marker of this topic from the line, keeping the rest in place
    pub fn strip_marker<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.marker().replace_all(line, "")
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// optional asterisks, whitespace and hashes in front of `<topic>:`
fn marker_regex(topic: Topic) -> Regex {
    let pattern = format!(r"(?i)\**\s*#*\s*{}:\s*", topic.name());
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid marker pattern {}: {}", pattern, e))
}

/// check if a line carries a marker for the given topic
pub fn contains_topic(line: &str, topic: Topic) -> bool {
    topic.is_marked(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_topic_private() {
        assert!(contains_topic("private:", Topic::Private));
        assert!(contains_topic("Private:", Topic::Private));
        assert!(contains_topic("PRIVATE:", Topic::Private));
        assert!(contains_topic("#private:", Topic::Private));
        assert!(contains_topic("# private:", Topic::Private));
        assert!(contains_topic("# private: ", Topic::Private));
        assert!(contains_topic("** ## Private:", Topic::Private));

        assert!(!contains_topic("private", Topic::Private));
    }

    #[test]
    fn test_contains_topic_public() {
        assert!(contains_topic("public:", Topic::Public));
        assert!(contains_topic("Public:", Topic::Public));
        assert!(contains_topic("PUBLIC:", Topic::Public));
        assert!(contains_topic("#public:", Topic::Public));
        assert!(contains_topic("# public:", Topic::Public));
        assert!(contains_topic("# public: ", Topic::Public));

        assert!(!contains_topic("public", Topic::Public));
    }

    #[test]
    fn test_marker_not_anchored() {
        assert!(contains_topic("some text # Private: more", Topic::Private));
        assert!(!contains_topic("some text # Private: more", Topic::Public));
    }

    #[test]
    fn test_strip_marker_keeps_remainder() {
        assert_eq!(
            Topic::Public.strip_marker("# Public: * one liner"),
            "* one liner"
        );
        assert_eq!(Topic::Private.strip_marker("#private:"), "");
        assert_eq!(
            Topic::Private.strip_marker("before # Private: after"),
            "beforeafter"
        );
    }

    #[test]
    fn test_strip_marker_without_match_borrows() {
        let stripped = Topic::Public.strip_marker("nothing here");
        assert!(matches!(stripped, Cow::Borrowed("nothing here")));
    }
}
