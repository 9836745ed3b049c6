use serde::{Deserialize, Serialize};

const EMBEDDED_SITE: &str = include_str!("../../content/site.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub skills: Vec<Skill>,
    pub timeline: Vec<Milestone>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

/// Static sections of the site, rendered as-is by the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: Hero,
    pub about: About,
    pub achievements: Vec<Achievement>,
    pub navigation: Vec<String>,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
}

impl SiteContent {
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(EMBEDDED_SITE)
    }

    pub fn section(&self, name: &str) -> Option<serde_json::Value> {
        let value = match name {
            "hero" => serde_json::to_value(&self.hero),
            "about" => serde_json::to_value(&self.about),
            "achievements" => serde_json::to_value(&self.achievements),
            "navigation" => serde_json::to_value(&self.navigation),
            "projects" => serde_json::to_value(&self.projects),
            "social_links" => serde_json::to_value(&self.social_links),
            _ => return None,
        };
        value.ok()
    }
}
