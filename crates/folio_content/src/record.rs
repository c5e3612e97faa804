//! Record shapes for every content entity.
//!
//! Each struct is the explicit schema for one entity: field names follow the
//! editor's camelCase JSON, every field has a default, and decoding happens
//! exactly once at the store boundary.

use crate::de;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// ============================================================================
// Record Kinds
// ============================================================================

/// Content entity with exactly one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Singleton {
    Hero,
    About,
}

impl Singleton {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
        }
    }
}

/// Content entity with many identified instances, one per sub-directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Experiences,
    Projects,
    Posts,
}

impl Collection {
    pub const ALL: [Self; 3] = [Self::Experiences, Self::Projects, Self::Posts];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Experiences => "experiences",
            Self::Projects => "projects",
            Self::Posts => "posts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Singletons
// ============================================================================

/// Landing section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroRecord {
    #[serde(deserialize_with = "de::text")]
    pub eyebrow: String,
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    #[serde(deserialize_with = "de::text")]
    pub title: String,
    #[serde(deserialize_with = "de::text")]
    pub tagline: String,
    #[serde(deserialize_with = "de::text")]
    pub cta_contact_label: String,
    #[serde(deserialize_with = "de::text")]
    pub cta_resume_label: String,
}

/// Substituted whenever `hero.json` is absent or malformed, and used for any
/// field a partial record omits.
impl Default for HeroRecord {
    fn default() -> Self {
        Self {
            eyebrow: "Venture Capitalist".into(),
            name: "Jacob".into(),
            title: String::new(),
            tagline: String::new(),
            cta_contact_label: "Contact".into(),
            cta_resume_label: "Resume".into(),
        }
    }
}

/// About page content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutRecord {
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    #[serde(deserialize_with = "de::text")]
    pub role: String,
    #[serde(deserialize_with = "de::text")]
    pub bio: String,
    #[serde(deserialize_with = "de::optional_text")]
    pub profile_image: Option<String>,
    pub stats: Vec<Stat>,
    pub skills: Vec<SkillGroup>,
    #[serde(deserialize_with = "de::text")]
    pub journey_title: String,
    #[serde(deserialize_with = "de::list")]
    pub journey_paragraphs: Vec<String>,
    #[serde(deserialize_with = "de::text")]
    pub contact_email: String,
    pub social_links: Vec<SocialLink>,
}

/// A `{label, value}` pair such as "8+ years".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    #[serde(deserialize_with = "de::text")]
    pub label: String,
    #[serde(deserialize_with = "de::text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    #[serde(deserialize_with = "de::text")]
    pub category: String,
    #[serde(deserialize_with = "de::list")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    #[serde(deserialize_with = "de::text")]
    pub label: String,
    #[serde(deserialize_with = "de::optional_text")]
    pub url: Option<String>,
}

// ============================================================================
// Collection Entries
// ============================================================================

/// One position in the experience timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Directory name of the entry.
    #[serde(skip_deserializing)]
    pub slug: String,
    #[serde(deserialize_with = "de::text")]
    pub company: String,
    #[serde(deserialize_with = "de::text")]
    pub role: String,
    #[serde(deserialize_with = "de::text")]
    pub period_start: String,
    /// Empty means the position is ongoing.
    #[serde(deserialize_with = "de::text")]
    pub period_end: String,
    #[serde(deserialize_with = "de::text")]
    pub description: String,
    #[serde(deserialize_with = "de::list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "de::list")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "de::integer")]
    pub sort_order: i64,
}

impl ExperienceEntry {
    /// Attach the entry identifier; an omitted company name falls back to it.
    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = slug.to_owned();
        if self.company.is_empty() {
            self.company = slug.to_owned();
        }
        self
    }

    pub fn is_ongoing(&self) -> bool {
        self.period_end.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Investment,
    Product,
    Development,
    Advisory,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "investment" => Ok(Self::Investment),
            "product" => Ok(Self::Product),
            "development" => Ok(Self::Development),
            "advisory" => Ok(Self::Advisory),
            other => Err(format!("unknown project category `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Exited,
    Completed,
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "exited" => Ok(Self::Exited),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown project status `{other}`")),
        }
    }
}

/// A portfolio project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(skip_deserializing)]
    pub slug: String,
    #[serde(deserialize_with = "de::text")]
    pub title: String,
    #[serde(deserialize_with = "de::text")]
    pub description: String,
    #[serde(deserialize_with = "de::choice")]
    pub category: Category,
    #[serde(deserialize_with = "de::text")]
    pub year: String,
    #[serde(deserialize_with = "de::choice")]
    pub status: Status,
    #[serde(deserialize_with = "de::list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "de::optional_text")]
    pub link: Option<String>,
    #[serde(deserialize_with = "de::optional_text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "de::list")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "de::integer")]
    pub sort_order: i64,
}

impl ProjectEntry {
    /// Attach the entry identifier; an omitted title falls back to it.
    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = slug.to_owned();
        if self.title.is_empty() {
            self.title = slug.to_owned();
        }
        self
    }
}

/// Post metadata as it appears in listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEntry {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Publication date as written by the author (e.g. "2024-01-15").
    pub date: String,
    pub tags: Vec<String>,
    pub published: bool,
    /// Estimated minutes to read the body.
    pub reading_time: u32,
}

/// A post with its body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostDocument {
    #[serde(flatten)]
    pub meta: PostEntry,
    /// Markdown body with the front matter removed, trimmed.
    pub content: String,
}

/// Table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocItem {
    /// Anchor identifier, see [`crate::toc::slugify`].
    pub id: String,
    /// Heading text with inline formatting stripped.
    pub title: String,
    /// Heading depth, 2 or 3.
    pub level: u8,
}

/// Neighbours of a post in the newest-first listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Adjacent {
    /// Chronologically older post.
    pub prev: Option<PostEntry>,
    /// Chronologically newer post.
    pub next: Option<PostEntry>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_partial_keeps_defaults() {
        let hero: HeroRecord = serde_json::from_str(r#"{"name": "Mina"}"#).unwrap();
        assert_eq!(hero.name, "Mina");
        assert_eq!(hero.eyebrow, "Venture Capitalist");
        assert_eq!(hero.cta_contact_label, "Contact");
        assert_eq!(hero.cta_resume_label, "Resume");
    }

    #[test]
    fn test_about_full_record() {
        let about: AboutRecord = serde_json::from_str(
            r#"{
                "name": "Mina",
                "role": "Partner",
                "bio": "Investor.",
                "profileImage": "/images/me.png",
                "stats": [{"label": "years", "value": "8+"}],
                "skills": [{"category": "Deals", "items": ["DD", "M&A"]}],
                "journeyTitle": "Journey",
                "journeyParagraphs": ["one", "two"],
                "contactEmail": "mina@example.com",
                "socialLinks": [{"label": "LinkedIn", "url": null}]
            }"#,
        )
        .unwrap();

        assert_eq!(about.profile_image.as_deref(), Some("/images/me.png"));
        assert_eq!(about.stats[0].value, "8+");
        assert_eq!(about.skills[0].items, vec!["DD", "M&A"]);
        assert_eq!(about.journey_paragraphs.len(), 2);
        assert_eq!(about.social_links[0].url, None);
    }

    #[test]
    fn test_about_empty_image_is_none() {
        let about: AboutRecord = serde_json::from_str(r#"{"profileImage": ""}"#).unwrap();
        assert_eq!(about.profile_image, None);
        assert_eq!(about, AboutRecord::default());
    }

    #[test]
    fn test_experience_defaults_and_slug() {
        let entry: ExperienceEntry = serde_json::from_str(r#"{"role": "Partner", "sortOrder": null}"#)
            .unwrap();
        let entry = entry.with_slug("acme");

        assert_eq!(entry.slug, "acme");
        assert_eq!(entry.company, "acme");
        assert_eq!(entry.sort_order, 0);
        assert!(entry.is_ongoing());
        assert!(entry.skills.is_empty());
    }

    #[test]
    fn test_experience_keeps_company() {
        let entry: ExperienceEntry =
            serde_json::from_str(r#"{"company": "Acme Corp", "periodEnd": "2023.02"}"#).unwrap();
        let entry = entry.with_slug("acme");
        assert_eq!(entry.company, "Acme Corp");
        assert!(!entry.is_ongoing());
    }

    #[test]
    fn test_experience_wrong_sort_order_type_is_error() {
        let result = serde_json::from_str::<ExperienceEntry>(r#"{"sortOrder": "first"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_project_choices() {
        let project: ProjectEntry = serde_json::from_str(
            r#"{"category": "advisory", "status": "exited", "year": 2021, "link": ""}"#,
        )
        .unwrap();
        assert_eq!(project.category, Category::Advisory);
        assert_eq!(project.status, Status::Exited);
        assert_eq!(project.year, "2021");
        assert_eq!(project.link, None);
    }

    #[test]
    fn test_project_empty_choice_uses_default() {
        let project: ProjectEntry =
            serde_json::from_str(r#"{"category": "", "status": null}"#).unwrap();
        assert_eq!(project.category, Category::Investment);
        assert_eq!(project.status, Status::Active);
    }

    #[test]
    fn test_project_unknown_choice_is_error() {
        let result = serde_json::from_str::<ProjectEntry>(r#"{"category": "charity"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_post_document_serializes_flat() {
        let doc = PostDocument {
            meta: PostEntry {
                slug: "hello".into(),
                reading_time: 1,
                ..Default::default()
            },
            content: "Hi".into(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["slug"], "hello");
        assert_eq!(json["readingTime"], 1);
        assert_eq!(json["content"], "Hi");
    }
}
