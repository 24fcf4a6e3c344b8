// fragment parser

use super::topic::Topic;
use super::types::{ChangelogEntry, ChangelogFragment};
use std::slice;

/// classify a single fragment line
///
/// returns the entry produced by the line, if any, and the topic that
/// applies to the following lines
pub fn parse_line(line: &str, task: &str, current: Topic) -> (Option<ChangelogEntry>, Topic) {
    let tag = format!("[{}]", task);
    let line = line.strip_suffix(tag.as_str()).unwrap_or(line).trim();

    for topic in Topic::ALL {
        if topic.is_marked(line) {
            let text = topic.strip_marker(line);
            // marker-only lines switch the topic without producing an entry
            let entry = if text.trim().is_empty() {
                None
            } else {
                Some(ChangelogEntry::new(topic, task, text))
            };
            return (entry, topic);
        }
    }

    // unmarked lines are kept even when blank
    (Some(ChangelogEntry::new(current, task, line)), current)
}

/// lazy sequence of entries read from one fragment
pub struct FragmentEntries<'a> {
    task: &'a str,
    lines: slice::Iter<'a, String>,
    topic: Topic,
}

impl<'a> FragmentEntries<'a> {
    fn new(fragment: &'a ChangelogFragment) -> Self {
        Self {
            task: fragment.task(),
            lines: fragment.lines.iter(),
            topic: Topic::Public,
        }
    }
}

impl Iterator for FragmentEntries<'_> {
    type Item = ChangelogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let (entry, topic) = parse_line(line, self.task, self.topic);
            self.topic = topic;
            if entry.is_some() {
                return entry;
            }
        }
        None
    }
}

/// parse the lines of a fragment into changelog entries
pub fn parse_fragment(fragment: &ChangelogFragment) -> FragmentEntries<'_> {
    FragmentEntries::new(fragment)
}
