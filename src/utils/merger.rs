use super::changelog::{
    ChangelogFragment, ReleaseNamer, Topic, format_changelog, group_by_topic, parse_fragment,
};
use super::config::MergeConfig;
use super::filesystem::FragmentExplorer;
use super::prepend::prepend_to_file;
use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::PathBuf;
use tracing::{debug, info};

/// outcome of a single merge or preview run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    pub release_name: String,
    pub generated_at: DateTime<FixedOffset>,
    pub block: String,
    pub fragments: Vec<PathBuf>,
    pub public_entries: usize,
    pub private_entries: usize,
    pub destination: PathBuf,
    /// the destination was rewritten
    pub written: bool,
    pub deleted: Vec<PathBuf>,
}

impl MergeReport {
    pub fn has_fragments(&self) -> bool {
        !self.fragments.is_empty()
    }

    pub fn total_entries(&self) -> usize {
        self.public_entries + self.private_entries
    }
}

/// merges changelog fragments into the destination changelog
pub struct ChangelogMerger {
    config: MergeConfig,
    namer: ReleaseNamer,
}

impl ChangelogMerger {
    /// fails if the configured locale is unknown
    pub fn new(config: MergeConfig) -> Result<Self> {
        let namer = ReleaseNamer::from_locale_name(&config.locale)?;
        Ok(Self { config, namer })
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    fn explorer(&self) -> FragmentExplorer {
        FragmentExplorer::new(
            &self.config.changelog_dir,
            &self.config.fragment_extension,
        )
        .excluding(&self.config.changelog_file)
    }

    /// render the block for the current fragments without touching any file
    pub fn preview_at<Tz>(&self, now: &DateTime<Tz>) -> Result<MergeReport>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let fragments = self.explorer().read_fragments()?;
        Ok(self.render(&fragments, now))
    }

    pub fn preview(&self) -> Result<MergeReport> {
        self.preview_at(&Local::now())
    }

    /// prepend the rendered block to the destination, then delete the consumed
    /// fragments if configured
    ///
    /// nothing is written when the fragment directory holds no fragments
    pub fn merge_at<Tz>(&self, now: &DateTime<Tz>) -> Result<MergeReport>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let destination = &self.config.changelog_file;
        if !destination.is_file() {
            return Err(Error::DestinationMissing {
                path: destination.clone(),
            });
        }

        let explorer = self.explorer();
        let fragments = explorer.read_fragments()?;
        let mut report = self.render(&fragments, now);

        if !report.has_fragments() {
            info!(dir = %self.config.changelog_dir.display(), "no changelog fragments to merge");
            return Ok(report);
        }

        prepend_to_file(destination, &report.block)?;
        report.written = true;
        info!(
            destination = %destination.display(),
            fragments = report.fragments.len(),
            entries = report.total_entries(),
            "merged changelog fragments"
        );

        if self.config.delete_merged_files {
            report.deleted = explorer.delete_all(&report.fragments)?;
            info!(count = report.deleted.len(), "deleted merged fragments");
        }

        Ok(report)
    }

    pub fn merge(&self) -> Result<MergeReport> {
        self.merge_at(&Local::now())
    }

    fn render<Tz>(
        &self,
        fragments: &[(PathBuf, ChangelogFragment)],
        now: &DateTime<Tz>,
    ) -> MergeReport
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let entries = fragments
            .iter()
            .flat_map(|(_, fragment)| parse_fragment(fragment));
        let groups = group_by_topic(entries);

        let count = |topic: Topic| groups.get(&topic).map(Vec::len).unwrap_or(0);
        let (public_entries, private_entries) = (count(Topic::Public), count(Topic::Private));
        debug!(public_entries, private_entries, "grouped changelog entries");

        let release_name = self.namer.name_at(now);
        let block = format_changelog(&release_name, &groups, self.config.heading_style);

        MergeReport {
            release_name,
            generated_at: now.fixed_offset(),
            block,
            fragments: fragments.iter().map(|(path, _)| path.clone()).collect(),
            public_entries,
            private_entries,
            destination: self.config.changelog_file.clone(),
            written: false,
            deleted: Vec::new(),
        }
    }
}
