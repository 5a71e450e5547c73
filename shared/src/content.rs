use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page content shipped with the binary; see `shared/portfolio.toml`.
pub const EMBEDDED_CONTENT: &str = include_str!("../portfolio.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse page content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("page content is missing `{0}`")]
    MissingField(&'static str),
    #[error("invalid contact email `{0}`")]
    InvalidEmail(String),
}

// ===== CONTENT TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PortfolioContent {
    pub meta: PageMeta,
    pub header: HeaderContent,
    pub hero: HeroContent,
    pub projects: ProjectsContent,
    pub contact: ContactContent,
}

/// Document metadata, set once when the page is served.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(default = "PageMeta::default_language")]
    pub language: String,
}

impl PageMeta {
    fn default_language() -> String {
        "en".to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeaderContent {
    pub brand: String,
    pub nav: Vec<NavItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct NavItem(pub String);

impl NavItem {
    pub fn label(&self) -> &str {
        &self.0
    }

    /// In-page anchor, e.g. `Projects` -> `#projects`.
    pub fn href(&self) -> String {
        format!("#{}", self.0.to_lowercase())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeroContent {
    pub heading: String,
    pub tagline: String,
    pub call_to_action: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectsContent {
    pub heading: String,
    pub cards: Vec<ProjectCard>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContactContent {
    pub heading: String,
    pub text: String,
    pub call_to_action: String,
    pub email: String,
}

impl ContactContent {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

// ===== SECTIONS =====

/// Page sections in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Hero,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Header, Section::Hero, Section::Projects, Section::Contact];

    /// DOM id used as the target of in-page navigation.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Projects => Some("projects"),
            Section::Contact => Some("contact"),
            Section::Header | Section::Hero => None,
        }
    }
}

// ===== LOADING & VALIDATION =====

impl PortfolioContent {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml(EMBEDDED_CONTENT)
    }

    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.meta.title.trim().is_empty() {
            return Err(ContentError::MissingField("meta.title"));
        }
        if self.header.brand.trim().is_empty() {
            return Err(ContentError::MissingField("header.brand"));
        }
        if self.header.nav.is_empty() {
            return Err(ContentError::MissingField("header.nav"));
        }
        if self.projects.cards.is_empty() {
            return Err(ContentError::MissingField("projects.cards"));
        }
        if !is_plausible_email(&self.contact.email) {
            return Err(ContentError::InvalidEmail(self.contact.email.clone()));
        }
        Ok(())
    }

    /// Every visible text of `section`, in document order.
    pub fn texts(&self, section: Section) -> Vec<&str> {
        match section {
            Section::Header => std::iter::once(self.header.brand.as_str())
                .chain(self.header.nav.iter().map(NavItem::label))
                .collect(),
            Section::Hero => vec![
                self.hero.heading.as_str(),
                self.hero.tagline.as_str(),
                self.hero.call_to_action.as_str(),
            ],
            Section::Projects => std::iter::once(self.projects.heading.as_str())
                .chain(
                    self.projects
                        .cards
                        .iter()
                        .flat_map(|card| [card.title.as_str(), card.description.as_str()]),
                )
                .collect(),
            Section::Contact => vec![
                self.contact.heading.as_str(),
                self.contact.text.as_str(),
                self.contact.call_to_action.as_str(),
            ],
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
