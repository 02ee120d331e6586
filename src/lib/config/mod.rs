use serde::Serialize;

use crate::types::{Metadata, Site, Social, Socials};

pub const SITE: Site = Site::new("Altinok D.", "");

// Home page header and description meta tag.
pub const HOME: Metadata = Metadata::new("Altinok D.", "Personal blog of Altinok D.");

// Rendered in this order.
pub const SOCIALS: Socials = &[
    Social::new("github", "https://github.com/altinokdarici"),
    Social::new("linkedin", "https://www.linkedin.com/in/altinokdarici"),
];

/// Convenience container for the whole table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub site: Site,
    pub home: Metadata,
    pub socials: Socials,
}

impl SiteConfig {
    /// First link whose platform name matches, ignoring ASCII case.
    pub fn social(&self, name: &str) -> Option<&Social> {
        self.socials
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        site: SITE,
        home: HOME,
        socials: SOCIALS,
    }
}

#[cfg(test)]
mod tests;
