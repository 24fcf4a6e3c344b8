// release heading

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Local, Locale, TimeZone};
use std::fmt::Display;

/// builds the heading placed on top of every merged block
#[derive(Debug, Clone, Copy)]
pub struct ReleaseNamer {
    locale: Locale,
    date_format: &'static str,
}

impl ReleaseNamer {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            date_format: medium_date_format(&format!("{:?}", locale)),
        }
    }

    /// create a namer from a locale name such as `de_DE` or `en_US`
    pub fn from_locale_name(name: &str) -> Result<Self> {
        let locale = Locale::try_from(name).map_err(|_| Error::UnknownLocale {
            locale: name.to_string(),
        })?;
        Ok(Self::new(locale))
    }

    /// release name for the given point in time, e.g. `2024.3 vom 15.01.2024`
    ///
    /// the build name is the calendar year followed by the ISO week
    pub fn name_at<Tz>(&self, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let build_name = format!("{}.{}", now.year(), now.iso_week().week());
        let date = now.format_localized(self.date_format, self.locale).to_string();
        release_name_pattern(&build_name, &date)
    }

    /// release name for the current local time
    pub fn name_now(&self) -> String {
        self.name_at(&Local::now())
    }
}

impl Default for ReleaseNamer {
    fn default() -> Self {
        Self::new(Locale::de_DE)
    }
}

// medium length date, e.g. `29.12.2025` or `Dec 29, 2025`
fn medium_date_format(locale_name: &str) -> &'static str {
    match locale_name {
        "en_US" => "%b %-d, %Y",
        name if name.starts_with("en_") => "%-d %b %Y",
        _ => "%x",
    }
}

fn release_name_pattern(build_name: &str, date: &str) -> String {
    format!("{} vom {}", build_name, date)
}
