//! Copy and ticker logos for the page, kept as data in `static/content.json`.

use log::error;
use serde::Deserialize;

const SITE_JSON: &str = include_str!("../static/content.json");

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Brand {
    pub primary: String,
    pub secondary: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub accent: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub accent: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub accent: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct TickerItem {
    pub title: String,
    pub image_url: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct TickerContent {
    pub top_speed: f64,
    pub bottom_speed: f64,
    pub top: Vec<TickerItem>,
    pub bottom: Vec<TickerItem>,
}

impl Default for TickerContent {
    fn default() -> Self {
        Self {
            top_speed: 40.0,
            bottom_speed: 40.0,
            top: Vec::new(),
            bottom: Vec::new(),
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav_links: Vec<NavLink>,
    pub hero_words: Vec<String>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub ticker: TickerContent,
    pub socials: Vec<NavLink>,
}

pub fn parse(json: &str) -> Result<SiteContent, serde_json::Error> {
    serde_json::from_str(json)
}

/// The embedded site content. A broken document still renders the page
/// skeleton.
pub fn site() -> SiteContent {
    match parse(SITE_JSON) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to parse site content: {}", e);
            SiteContent::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = parse(SITE_JSON).expect("content.json should parse");
        assert_eq!(content.hero_words, vec!["Creators", "Startups", "Brands"]);
        assert_eq!(content.services.len(), 3);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.testimonials.len(), 3);
        assert!(!content.ticker.top.is_empty());
        assert!(!content.ticker.bottom.is_empty());
    }

    #[test]
    fn nav_links_point_at_page_sections() {
        let content = site();
        for link in &content.nav_links {
            let id = link.href.trim_start_matches('#');
            assert!(
                crate::motion::sections::SectionId::from_dom_id(id).is_some(),
                "{} points nowhere",
                link.href
            );
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let content = parse(r#"{ "hero_words": ["Only"] }"#).expect("partial document");
        assert_eq!(content.hero_words, vec!["Only"]);
        assert!(content.services.is_empty());
        assert_eq!(content.ticker.top_speed, 40.0);
    }

    #[test]
    fn broken_json_is_an_error() {
        assert!(parse("{ not json").is_err());
    }
}
