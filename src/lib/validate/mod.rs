//! Authoring checks for the metadata table.
//!
//! The table itself never validates anything; these checks are run by the
//! test suite and the `check` subcommand so a bad href or an empty title is
//! reported before a generator renders it.

use std::{collections::HashSet, fmt};

use color_eyre::{Section, eyre::eyre};
use tracing::{debug, warn};
use url::Url;

use crate::{config::SiteConfig, types::Platform};

/// A single authoring mistake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    EmptySiteName,
    MalformedEmail(&'static str),
    EmptyTitle,
    EmptyDescription,
    EmptySocialName { index: usize },
    InvalidHref {
        name: &'static str,
        href: &'static str,
        reason: String,
    },
    DuplicateSocial(&'static str),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySiteName => f.write_str("site name is empty"),
            Self::MalformedEmail(email) => write!(f, "email {email:?} is not an address"),
            Self::EmptyTitle => f.write_str("page title is empty"),
            Self::EmptyDescription => f.write_str("page description is empty"),
            Self::EmptySocialName { index } => write!(f, "social link #{index} has no name"),
            Self::InvalidHref { name, href, reason } => {
                write!(f, "{} link has invalid href {href:?}: {reason}", link_label(*name))
            }
            Self::DuplicateSocial(name) => {
                write!(f, "{} link is declared twice", link_label(*name))
            }
        }
    }
}

impl SiteConfig {
    /// Every problem in the table, in declaration order.
    pub fn problems(&self) -> Vec<Problem> {
        let mut problems = Vec::new();

        if self.site.name.trim().is_empty() {
            problems.push(Problem::EmptySiteName);
        }
        if self.site.has_email() && !is_plausible_email(self.site.email) {
            problems.push(Problem::MalformedEmail(self.site.email));
        }
        if self.home.title.trim().is_empty() {
            problems.push(Problem::EmptyTitle);
        }
        if self.home.description.trim().is_empty() {
            problems.push(Problem::EmptyDescription);
        }

        let mut seen = HashSet::new();
        for (index, social) in self.socials.iter().enumerate() {
            if social.name.trim().is_empty() {
                problems.push(Problem::EmptySocialName { index });
            } else if !seen.insert(social.name.trim().to_ascii_lowercase()) {
                problems.push(Problem::DuplicateSocial(social.name));
            }

            if let Err(reason) = check_href(social.href) {
                problems.push(Problem::InvalidHref {
                    name: social.name,
                    href: social.href,
                    reason,
                });
            }
        }

        problems
    }

    pub fn validate(&self) -> color_eyre::Result<()> {
        let problems = self.problems();
        if problems.is_empty() {
            debug!(socials = self.socials.len(), "site metadata is valid");
            return Ok(());
        }

        for problem in &problems {
            warn!(%problem, "invalid site metadata");
        }

        Err(problems.iter().fold(
            eyre!("Site metadata has {} problem(s)", problems.len()),
            |report, problem| report.note(problem.to_string()),
        ))
    }
}

fn link_label(name: &'static str) -> &'static str {
    if name.trim().is_empty() {
        "unnamed"
    } else {
        Platform::from_name(name).label()
    }
}

fn check_href(href: &str) -> Result<(), String> {
    // Url::parse strips these silently; the stored text must already be clean.
    if href.chars().any(|c| c.is_ascii_whitespace() || c.is_control()) {
        return Err("contains whitespace or control characters".to_string());
    }
    let url = Url::parse(href).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        "http" | "https" => Err("missing host".to_string()),
        other => Err(format!("unsupported scheme {other:?}")),
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
