//! Project catalog and tag registry.
//!
//! The catalog is loaded wholesale at startup from a JSON or TOML file and is
//! never mutated afterwards. The file carries two top-level keys: `tags`, a
//! map from tag id to `{ label, icon }`, and `projects`, an ordered array of
//! project records.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::ui::filter::ALL_FILTER;

/// A technology tag: display label plus an opaque icon reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinition {
    /// Unique key, used in card annotations and filter controls.
    pub id: String,
    /// Display name.
    pub label: String,
    /// Icon URL. Never fetched or validated.
    pub icon: String,
}

/// Registry entry as written in catalog files, keyed by tag id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagEntry {
    /// Display name.
    pub label: String,
    /// Icon URL.
    #[serde(default, alias = "iconRef", alias = "icon_ref")]
    pub icon: String,
}

/// Fixed lookup table from tag id to [`TagDefinition`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, TagEntry>", into = "BTreeMap<String, TagEntry>")]
pub struct TagRegistry {
    tags: BTreeMap<String, TagDefinition>,
}

impl From<BTreeMap<String, TagEntry>> for TagRegistry {
    fn from(entries: BTreeMap<String, TagEntry>) -> Self {
        entries
            .into_iter()
            .map(|(id, entry)| TagDefinition {
                id,
                label: entry.label,
                icon: entry.icon,
            })
            .collect()
    }
}

impl From<TagRegistry> for BTreeMap<String, TagEntry> {
    fn from(registry: TagRegistry) -> Self {
        registry
            .tags
            .into_iter()
            .map(|(id, tag)| {
                (
                    id,
                    TagEntry {
                        label: tag.label,
                        icon: tag.icon,
                    },
                )
            })
            .collect()
    }
}

impl FromIterator<TagDefinition> for TagRegistry {
    fn from_iter<I: IntoIterator<Item = TagDefinition>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(|tag| (tag.id.clone(), tag)).collect(),
        }
    }
}

impl TagRegistry {
    /// Look up a tag by id.
    #[must_use]
    pub fn lookup(&self, tag_id: &str) -> Option<&TagDefinition> {
        self.tags.get(tag_id)
    }

    /// Check whether a tag id is registered.
    #[must_use]
    pub fn contains(&self, tag_id: &str) -> bool {
        self.tags.contains_key(tag_id)
    }

    /// Number of registered tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over all tags, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &TagDefinition> {
        self.tags.values()
    }
}

/// One node of a project's architecture flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureStep {
    /// Role of the step (e.g. "Gateway").
    pub label: String,
    /// Component filling the role (e.g. "Supabase").
    pub name: String,
    /// Whether the step gets distinct visual treatment.
    #[serde(default, alias = "highlighted")]
    pub highlight: bool,
}

/// A built feature: emphasized title plus description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Short feature name.
    pub title: String,
    /// Description; may use `**bold**` inline markup.
    pub description: String,
}

/// A screenshot entry. An empty `url` means "no image yet".

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    /// Image URL, or empty.
    #[serde(default)]
    pub url: String,
    /// Alternative text for the image.
    #[serde(default, alias = "altText", alias = "alt_text")]
    pub alt: String,
    /// Label shown in place of a missing image.
    #[serde(default, alias = "placeholderLabel", alias = "placeholder_label")]
    pub placeholder: String,
}

impl Screenshot {
    /// The trimmed image url, or `None` for a placeholder.
    ///
    /// Thumbnails and the lightbox both read the url through here.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        Some(self.url.trim()).filter(|url| !url.is_empty())
    }

    /// Whether this screenshot renders an image rather than a placeholder.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image_url().is_some()
    }
}

/// A portfolio project.
///
/// Optional sections are stored as possibly-empty vectors; an empty section is
/// treated exactly like an absent one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique id, used as the card key.
    pub id: String,
    /// Project title.
    pub title: String,
    /// Project type (e.g. "Integration System").
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form date string.
    pub date: String,
    /// Tag ids, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// One or two sentence summary.
    pub summary: String,
    /// The problem the project solved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    /// Architecture flow, left to right.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub architecture: Vec<ArchitectureStep>,
    /// Key features.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
    /// Technical highlights.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    /// Screenshot gallery.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<Screenshot>,
}

impl Project {
    /// The challenge text, if present and non-blank.
    #[must_use]
    pub fn challenge(&self) -> Option<&str> {
        self.challenge
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// Check whether the project carries the given tag id.
    #[must_use]
    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|tag| tag == tag_id)
    }
}

/// Policy for projects sharing an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// Fail the load.
    #[default]
    Reject,
    /// Keep the last occurrence, drop earlier ones.
    LastWins,
}

/// A project referencing a tag id missing from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownTag {
    /// The referencing project.
    pub project_id: String,
    /// The unresolved tag id.
    pub tag_id: String,
}

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// JSON (`.json`).
    Json,
    /// TOML (`.toml`).
    Toml,
}

impl CatalogFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// The full data set: tag registry plus ordered projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Tag registry.
    #[serde(default)]
    pub tags: TagRegistry,
    /// Projects, in display order.
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog from parts.
    #[must_use]
    pub fn new(tags: TagRegistry, projects: Vec<Project>) -> Self {
        Self { tags, projects }
    }

    /// Load, de-duplicate and check a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, has an unknown
    /// extension, or contains duplicate ids under [`DuplicateIdPolicy::Reject`].
    pub fn load(path: impl AsRef<Path>, config: &CatalogConfig) -> Result<Self> {
        let path = path.as_ref();
        let format =
            CatalogFormat::from_path(path).ok_or_else(|| Error::UnsupportedCatalogFormat {
                path: path.to_path_buf(),
            })?;

        debug!("Reading catalog from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| Error::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&text, format, path)?.resolve_duplicates(config.duplicate_ids)?;

        if config.warn_unknown_tags {
            for unknown in catalog.unknown_tags() {
                warn!(
                    project = %unknown.project_id,
                    tag = %unknown.tag_id,
                    "Project references a tag missing from the registry"
                );
            }
        }

        info!(
            projects = catalog.projects.len(),
            tags = catalog.tags.len(),
            "Catalog loaded from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Parse catalog text in the given format. `origin` is used for error context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogParse`] if the text does not match the catalog
    /// shape, or [`Error::ReservedTagId`] if the registry defines the id of the
    /// "all" filter.
    pub fn parse(text: &str, format: CatalogFormat, origin: &Path) -> Result<Self> {
        let catalog: Self = match format {
            CatalogFormat::Json => {
                serde_json::from_str(text).map_err(|e| Error::catalog_parse(origin, e.to_string()))
            }
            CatalogFormat::Toml => Figment::from(Toml::string(text))
                .extract()
                .map_err(|e| Error::catalog_parse(origin, e.to_string())),
        }?;

        if catalog.tags.contains(ALL_FILTER) {
            return Err(Error::ReservedTagId {
                path: origin.to_path_buf(),
                id: ALL_FILTER.to_string(),
            });
        }
        Ok(catalog)
    }

    /// Parse a JSON catalog held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogParse`] on malformed input.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse(text, CatalogFormat::Json, Path::new("<memory>"))
    }

    /// Parse a TOML catalog held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogParse`] on malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, CatalogFormat::Toml, Path::new("<memory>"))
    }

    /// Apply the duplicate-id policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProjectId`] for the first repeated id under
    /// [`DuplicateIdPolicy::Reject`].
    pub fn resolve_duplicates(mut self, policy: DuplicateIdPolicy) -> Result<Self> {
        match policy {
            DuplicateIdPolicy::Reject => {
                let mut seen = HashSet::new();
                for project in &self.projects {
                    if !seen.insert(project.id.as_str()) {
                        return Err(Error::DuplicateProjectId {
                            id: project.id.clone(),
                        });
                    }
                }
            }
            DuplicateIdPolicy::LastWins => {
                let mut seen = HashSet::new();
                let mut kept = Vec::with_capacity(self.projects.len());
                for project in self.projects.into_iter().rev() {
                    if seen.insert(project.id.clone()) {
                        kept.push(project);
                    } else {
                        warn!(id = %project.id, "Dropping earlier project with duplicate id");
                    }
                }
                kept.reverse();
                self.projects = kept;
            }
        }
        Ok(self)
    }

    /// Every (project, tag) pair whose tag id is not registered.
    #[must_use]
    pub fn unknown_tags(&self) -> Vec<UnknownTag> {
        let mut found = Vec::new();
        for project in &self.projects {
            let mut reported = HashSet::new();
            for tag in &project.tags {
                if !self.tags.contains(tag) && reported.insert(tag.as_str()) {
                    found.push(UnknownTag {
                        project_id: project.id.clone(),
                        tag_id: tag.clone(),
                    });
                }
            }
        }
        found
    }

    /// Find a project by id.
    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if the catalog has no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn tag(id: &str, label: &str) -> TagDefinition {
        TagDefinition {
            id: id.to_string(),
            label: label.to_string(),
            icon: format!("https://icons.example/{id}.png"),
        }
    }

    pub fn registry() -> TagRegistry {
        [
            tag("supabase", "Supabase"),
            tag("n8n", "n8n"),
            tag("digitalocean", "DigitalOcean"),
        ]
        .into_iter()
        .collect()
    }

    pub fn project(id: &str, tags: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            kind: "Integration System".to_string(),
            date: "2025".to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            summary: "A short summary.".to_string(),
            challenge: None,
            architecture: Vec::new(),
            features: Vec::new(),
            highlights: Vec::new(),
            screenshots: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{project, registry};
    use super::*;
    use crate::logging::init_test_logging;

    const SAMPLE_JSON: &str = r#"{
        "tags": {
            "supabase": { "label": "Supabase", "icon": "https://icons.example/supabase.png" },
            "n8n": { "label": "n8n", "icon": "https://icons.example/n8n.png" }
        },
        "projects": [
            {
                "id": "vdt-partner-api",
                "title": "Real Estate Partner API System",
                "type": "Integration System",
                "date": "2025",
                "tags": ["supabase", "doesnotexist"],
                "summary": "Partner API.",
                "challenge": "Partners needed **secure** access.",
                "architecture": [
                    { "label": "Partner", "name": "API Request" },
                    { "label": "Gateway", "name": "Supabase", "highlight": true }
                ],
                "features": [
                    { "title": "Auth", "description": "Token based" }
                ],
                "highlights": ["Edge functions"],
                "screenshots": [
                    { "url": "", "alt": "Docs", "placeholder": "API Docs" }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_registry_lookup() {
        let registry = registry();
        assert_eq!(registry.lookup("supabase").unwrap().label, "Supabase");
        assert!(registry.lookup("doesnotexist").is_none());
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_parse_json_catalog() {
        let catalog = Catalog::from_json_str(SAMPLE_JSON).unwrap();

        assert_eq!(catalog.tags.len(), 2);
        assert_eq!(catalog.tags.lookup("n8n").unwrap().id, "n8n");
        assert_eq!(catalog.len(), 1);

        let project = &catalog.projects[0];
        assert_eq!(project.kind, "Integration System");
        assert_eq!(project.architecture.len(), 2);
        assert!(!project.architecture[0].highlight);
        assert!(project.architecture[1].highlight);
        assert_eq!(project.screenshots[0].placeholder, "API Docs");
        assert!(!project.screenshots[0].has_image());
    }

    #[test]
    fn test_parse_accepts_camel_case_field_names() {
        let json = r#"{
            "tags": { "n8n": { "label": "n8n", "iconRef": "n8n.png" } },
            "projects": [{
                "id": "p", "title": "t", "type": "k", "date": "d", "summary": "s",
                "architecture": [{ "label": "a", "name": "b", "highlighted": true }],
                "screenshots": [{ "url": "x.png", "altText": "alt", "placeholderLabel": "ph" }]
            }]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.tags.lookup("n8n").unwrap().icon, "n8n.png");

        let project = &catalog.projects[0];
        assert!(project.tags.is_empty());
        assert!(project.architecture[0].highlight);
        assert_eq!(project.screenshots[0].alt, "alt");
        assert_eq!(project.screenshots[0].placeholder, "ph");
    }

    #[test]
    fn test_parse_toml_catalog() {
        let toml = r#"
            [tags.supabase]
            label = "Supabase"
            icon = "supabase.png"

            [[projects]]
            id = "one"
            title = "One"
            type = "Internal Tool"
            date = "2024"
            tags = ["supabase"]
            summary = "First."

            [[projects.features]]
            title = "Sync"
            description = "Keeps **everything** in sync"
        "#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.tags.lookup("supabase").unwrap().label, "Supabase");
        assert_eq!(catalog.projects[0].features[0].title, "Sync");
    }

    #[test]
    fn test_parse_malformed_catalog() {
        let result = Catalog::from_json_str(r#"{"projects": [{"id": 1}]}"#);
        assert!(matches!(result, Err(Error::CatalogParse { .. })));
    }

    #[test]
    fn test_screenshot_has_image() {
        let mut shot = Screenshot {
            url: "https://img.example/a.png".to_string(),
            ..Screenshot::default()
        };
        assert!(shot.has_image());
        shot.url = "   ".to_string();
        assert!(!shot.has_image());
        assert_eq!(shot.image_url(), None);
    }

    #[test]
    fn test_screenshot_image_url_is_trimmed() {
        let shot = Screenshot {
            url: "  shots/gateway.png\n".to_string(),
            ..Screenshot::default()
        };
        assert_eq!(shot.image_url(), Some("shots/gateway.png"));
    }

    #[test]
    fn test_reserved_all_tag_rejected() {
        let json = r#"{
            "tags": {
                "all": { "label": "Everything" },
                "n8n": { "label": "n8n" }
            },
            "projects": [
                { "id": "a", "title": "A", "type": "k", "date": "d", "summary": "s", "tags": ["all"] },
                { "id": "b", "title": "B", "type": "k", "date": "d", "summary": "s", "tags": ["n8n"] }
            ]
        }"#;
        let result = Catalog::from_json_str(json);
        assert!(matches!(result, Err(Error::ReservedTagId { id, .. }) if id == "all"));
    }

    #[test]
    fn test_reserved_all_tag_rejected_in_toml() {
        let toml = r#"
            [tags.all]
            label = "Everything"
        "#;
        assert!(matches!(
            Catalog::from_toml_str(toml),
            Err(Error::ReservedTagId { .. })
        ));
    }

    #[test]
    fn test_blank_challenge_is_absent() {
        let mut p = project("a", &[]);
        p.challenge = Some("  ".to_string());
        assert!(p.challenge().is_none());
        p.challenge = Some("Real problem".to_string());
        assert_eq!(p.challenge(), Some("Real problem"));
    }

    #[test]
    fn test_reject_duplicate_ids() {
        let catalog = Catalog::new(
            registry(),
            vec![project("a", &[]), project("b", &[]), project("a", &[])],
        );
        let result = catalog.resolve_duplicates(DuplicateIdPolicy::Reject);
        assert!(matches!(result, Err(Error::DuplicateProjectId { id }) if id == "a"));
    }

    #[test]
    fn test_last_wins_keeps_last_occurrence() {
        init_test_logging();
        let mut last = project("a", &["n8n"]);
        last.title = "Second A".to_string();
        let catalog = Catalog::new(
            registry(),
            vec![project("a", &["supabase"]), project("b", &[]), last],
        );

        let resolved = catalog
            .resolve_duplicates(DuplicateIdPolicy::LastWins)
            .unwrap();
        let ids: Vec<_> = resolved.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(resolved.project("a").unwrap().title, "Second A");
    }

    #[test]
    fn test_unknown_tags() {
        let catalog = Catalog::new(
            registry(),
            vec![
                project("a", &["supabase", "doesnotexist", "doesnotexist"]),
                project("b", &["n8n", "zapier"]),
            ],
        );
        let unknown = catalog.unknown_tags();
        assert_eq!(unknown.len(), 2);
        assert_eq!(unknown[0].project_id, "a");
        assert_eq!(unknown[0].tag_id, "doesnotexist");
        assert_eq!(unknown[1].tag_id, "zapier");
    }

    #[test]
    fn test_catalog_format_from_path() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("data/catalog.json")),
            Some(CatalogFormat::Json)
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("catalog.TOML")),
            Some(CatalogFormat::Toml)
        );
        assert_eq!(CatalogFormat::from_path(Path::new("catalog.yaml")), None);
        assert_eq!(CatalogFormat::from_path(Path::new("catalog")), None);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("folio-catalog-test-load.json");
        std::fs::write(&path, SAMPLE_JSON).unwrap();

        let catalog = Catalog::load(&path, &CatalogConfig::default()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.project("vdt-partner-api").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/catalog.json", &CatalogConfig::default());
        assert!(matches!(result, Err(Error::CatalogRead { .. })));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let result = Catalog::load("catalog.yaml", &CatalogConfig::default());
        assert!(matches!(result, Err(Error::UnsupportedCatalogFormat { .. })));
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::from_json_str(include_str!("../../../data/catalog.json")).unwrap();
        let catalog = catalog
            .resolve_duplicates(DuplicateIdPolicy::Reject)
            .unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.unknown_tags().is_empty());
        assert_eq!(catalog.tags.lookup("fub").unwrap().label, "Follow Up Boss");
    }

    #[test]
    fn test_registry_serializes_as_map() {
        let json = serde_json::to_value(registry()).unwrap();
        assert_eq!(json["supabase"]["label"], "Supabase");
        assert!(json["supabase"].get("id").is_none());
    }
}
