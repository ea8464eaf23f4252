use std::collections::HashSet;

use log::warn;
use serde::Deserialize;

use crate::error::{Result, SiteError};

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub footer: FooterContent,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub target: NavTarget,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavTarget {
    /// Smooth-scroll to the section with this id.
    Section { id: String },
    /// Open in a new tab.
    External { url: String },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub image_alt: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub image: String,
    pub image_alt: String,
    #[serde(default)]
    pub image_first: bool,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Paragraph {
    #[serde(default)]
    pub lead: Option<String>,
    pub text: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FooterContent {
    pub email: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

impl SiteContent {
    /// Content bundled into the binary at build time.
    pub fn embedded() -> Result<Self> {
        Self::parse(SITE_JSON)
    }

    pub fn parse(json: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Section ids double as scroll anchors, so they must be unique on the page.
    /// Nav entries pointing at unknown sections are tolerated (navigating to them
    /// is a no-op) but reported.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(SiteError::Content(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }

        for link in &self.nav {
            if let NavTarget::Section { id } = &link.target {
                if !seen.contains(id.as_str()) {
                    warn!("nav entry '{}' points at unknown section '{}'", link.label, id);
                }
            }
        }
        Ok(())
    }
}
