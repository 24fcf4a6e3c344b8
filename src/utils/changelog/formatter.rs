// changelog block rendering

use super::topic::Topic;
use super::types::ChangelogEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const LINE_SEPARATOR: &str = "\n";

/// markdown level of the topic section headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    /// `# Public:`
    H1,
    /// `## Public:`
    #[default]
    H2,
}

impl HeadingStyle {
    pub fn format_topic(&self, topic: Topic) -> String {
        let prefix = match self {
            HeadingStyle::H1 => "#",
            HeadingStyle::H2 => "##",
        };
        format!("{} {}:", prefix, topic.name())
    }
}

impl std::str::FromStr for HeadingStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "h1" | "#" => Ok(HeadingStyle::H1),
            "h2" | "##" => Ok(HeadingStyle::H2),
            _ => Err(format!("invalid heading style: {}, use 'h1' or 'h2'", s)),
        }
    }
}

/// stable partition of entries by topic
pub fn group_by_topic<I>(entries: I) -> HashMap<Topic, Vec<ChangelogEntry>>
where
    I: IntoIterator<Item = ChangelogEntry>,
{
    let mut groups: HashMap<Topic, Vec<ChangelogEntry>> = HashMap::new();
    for entry in entries {
        groups.entry(entry.topic).or_default().push(entry);
    }
    groups
}

/// render the new changelog block
///
/// the release name comes first, followed by one section per topic in
/// [`Topic::ALL`] order. topics without entries get no section.
pub fn format_changelog(
    release_name: &str,
    groups: &HashMap<Topic, Vec<ChangelogEntry>>,
    style: HeadingStyle,
) -> String {
    let mut block = String::new();
    block.push_str(release_name);
    block.push_str(LINE_SEPARATOR);
    block.push_str(LINE_SEPARATOR);

    for topic in Topic::ALL {
        let Some(entries) = groups.get(&topic) else {
            continue;
        };

        block.push_str(&style.format_topic(topic));
        block.push_str(LINE_SEPARATOR);
        block.push_str(&format_entry_list(entries));
        block.push_str(LINE_SEPARATOR);
    }

    block
}

fn format_entry_list(entries: &[ChangelogEntry]) -> String {
    let mut list = entries
        .iter()
        .map(ChangelogEntry::to_string)
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR);
    list.push_str(LINE_SEPARATOR);
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(topic: Topic, task: &str, text: &str) -> ChangelogEntry {
        ChangelogEntry::new(topic, task, text)
    }

    #[test]
    fn test_group_by_topic_is_stable() {
        let groups = group_by_topic(vec![
            entry(Topic::Private, "A", "p1"),
            entry(Topic::Public, "A", "u1"),
            entry(Topic::Private, "B", "p2"),
            entry(Topic::Public, "B", "u2"),
        ]);

        let public: Vec<_> = groups[&Topic::Public].iter().map(|e| e.text.as_str()).collect();
        let private: Vec<_> = groups[&Topic::Private].iter().map(|e| e.text.as_str()).collect();
        assert_eq!(public, vec!["u1", "u2"]);
        assert_eq!(private, vec!["p1", "p2"]);
    }

    #[test]
    fn test_format_changelog_both_topics() {
        let groups = group_by_topic(vec![
            entry(Topic::Private, "B", "world"),
            entry(Topic::Public, "A", "hello"),
            entry(Topic::Public, "C", "again"),
        ]);

        let block = format_changelog("2024.3 vom 15.01.2024", &groups, HeadingStyle::H2);
        assert_eq!(
            block,
            "2024.3 vom 15.01.2024\n\n\
             ## Public:\nhello [A]\nagain [C]\n\n\
             ## Private:\nworld [B]\n\n"
        );
    }

    #[test]
    fn test_format_changelog_skips_absent_topic() {
        let groups = group_by_topic(vec![entry(Topic::Private, "B", "only private")]);

        let block = format_changelog("release", &groups, HeadingStyle::H1);
        assert_eq!(block, "release\n\n# Private:\nonly private [B]\n\n");
        assert!(!block.contains("Public"));
    }

    #[test]
    fn test_format_changelog_without_entries() {
        let block = format_changelog("release", &HashMap::new(), HeadingStyle::H2);
        assert_eq!(block, "release\n\n");
    }

    #[test]
    fn test_heading_style_from_str() {
        assert_eq!("h1".parse::<HeadingStyle>().unwrap(), HeadingStyle::H1);
        assert_eq!("##".parse::<HeadingStyle>().unwrap(), HeadingStyle::H2);
        assert!("h3".parse::<HeadingStyle>().is_err());
    }
}
