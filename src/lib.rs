pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogEntry, ChangelogFragment, FragmentEntries, HeadingStyle, ReleaseNamer, Topic,
    contains_topic, format_changelog, group_by_topic, parse_fragment, parse_line,
};
pub use utils::config::MergeConfig;
pub use utils::filesystem::FragmentExplorer;
pub use utils::merger::{ChangelogMerger, MergeReport};
pub use utils::prepend::prepend_to_file;
