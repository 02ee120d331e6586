use url::Url;

use super::{HOME, SITE, SOCIALS, site_config};
use crate::types::Social;

#[test]
fn site_name_is_present() {
    assert!(!SITE.name.trim().is_empty());
}

#[test]
fn home_metadata_is_present() {
    assert!(!HOME.title.trim().is_empty());
    assert!(!HOME.description.trim().is_empty());
}

#[test]
fn social_hrefs_are_absolute_urls() {
    for social in SOCIALS {
        let url = Url::parse(social.href).expect("href should parse");
        assert!(url.has_host(), "{} has no host", social.href);
    }
}

#[test]
fn socials_keep_declaration_order() {
    let names: Vec<&str> = SOCIALS.iter().map(|s| s.name).collect();
    assert_eq!(names, ["github", "linkedin"]);
    assert_eq!(SOCIALS[0].href, "https://github.com/altinokdarici");
    assert_eq!(SOCIALS[1].href, "https://www.linkedin.com/in/altinokdarici");
}

#[test]
fn iteration_preserves_order_and_hrefs() {
    const LINKS: &[Social] = &[
        Social::new("github", "https://github.com/x"),
        Social::new("linkedin", "https://linkedin.com/in/x"),
    ];
    let mut iter = LINKS.iter();
    assert_eq!(
        iter.next().map(|s| (s.name, s.href)),
        Some(("github", "https://github.com/x"))
    );
    assert_eq!(
        iter.next().map(|s| (s.name, s.href)),
        Some(("linkedin", "https://linkedin.com/in/x"))
    );
    assert!(iter.next().is_none());
}

#[test]
fn social_lookup_ignores_case() {
    let config = site_config();
    assert_eq!(
        config.social("LinkedIn").map(|s| s.href),
        Some("https://www.linkedin.com/in/altinokdarici")
    );
    assert!(config.social("mastodon").is_none());
}

#[test]
fn config_serializes_with_lowercase_keys() {
    let json = serde_json::to_value(site_config()).unwrap();
    assert_eq!(json["site"]["name"], "Altinok D.");
    assert_eq!(json["site"]["email"], "");
    assert_eq!(json["home"]["title"], "Altinok D.");
    assert_eq!(json["socials"][0]["name"], "github");
    assert_eq!(json["socials"][1]["href"], "https://www.linkedin.com/in/altinokdarici");
}
