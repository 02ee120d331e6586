//! Data shapes for the site metadata table.
//! Every field borrows `'static` text so values can live in `const` items.

use std::fmt;

use serde::Serialize;

/// Display name and contact address of the blog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Site {
    pub name: &'static str,
    /// May be empty when no address is published.
    pub email: &'static str,
}

impl Site {
    pub const fn new(name: &'static str, email: &'static str) -> Self {
        Self { name, email }
    }

    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

/// Title and description for one logical page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
}

impl Metadata {
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }
}

/// A named external profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Social {
    pub name: &'static str,
    pub href: &'static str,
}

impl Social {
    pub const fn new(name: &'static str, href: &'static str) -> Self {
        Self { name, href }
    }

    pub fn platform(&self) -> Platform {
        Platform::from_name(self.name)
    }
}

/// Social links in display order.
pub type Socials = &'static [Social];

/// Platforms the blog knows how to label. The set is open: anything
/// unrecognised is carried through as `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Github,
    Linkedin,
    Twitter,
    Mastodon,
    Email,
    Rss,
    Other(&'static str),
}

impl Platform {
    pub fn from_name(name: &'static str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "github" => Self::Github,
            "linkedin" => Self::Linkedin,
            "twitter" | "x" => Self::Twitter,
            "mastodon" => Self::Mastodon,
            "email" | "mail" => Self::Email,
            "rss" | "feed" => Self::Rss,
            _ => Self::Other(name),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Mastodon => "Mastodon",
            Self::Email => "Email",
            Self::Rss => "RSS",
            Self::Other(name) => *name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
