// changelog fragment parsing and rendering

pub mod formatter;
pub mod parser;
pub mod release;
pub mod topic;
pub mod types;

pub use formatter::{HeadingStyle, format_changelog, group_by_topic};
pub use parser::{FragmentEntries, parse_fragment, parse_line};
pub use release::ReleaseNamer;
pub use topic::{Topic, contains_topic};
pub use types::{ChangelogEntry, ChangelogFragment};
