//! Static metadata for the Altinok D. blog: site identity, page metadata and
//! social links, declared as constants for a site generator to read.

pub mod config;
pub mod types;
pub mod validate;

pub use config::{HOME, SITE, SOCIALS, SiteConfig, site_config};
