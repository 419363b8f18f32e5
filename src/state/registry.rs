//! Section registry entries and URL-hash resolution.
//!
//! DESIGN
//! ======
//! The registry is static for the page lifetime. Hash parsing lives here so
//! startup and resize relayout resolve deep links the same way.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use serde::{Deserialize, Serialize};

/// Id of the section shown when the hash names nothing known.
pub const DEFAULT_SECTION_ID: &str = "section-introduction";

/// One navigable section of the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// DOM id of the fragment's root element and the sidebar link target.
    pub id: String,
    /// Path the fragment markup is fetched from.
    pub source: String,
    /// Excluded from load-all / show-all; reachable only by direct hash.
    #[serde(default)]
    pub hidden: bool,
    /// Hash may carry an `id/<locale>/<slug>` deep link into this section.
    #[serde(default)]
    pub sub_paths: bool,
    /// Re-execute `<script>` elements after insertion instead of stripping them.
    #[serde(default)]
    pub scripts: bool,
    /// Header title shown instead of the site name; hides the contact links.
    #[serde(default)]
    pub header_title: Option<String>,
}

impl SectionEntry {
    /// Plain visible section with passive markup.
    pub fn new(id: &str, source: &str) -> Self {
        Self {
            id: id.to_owned(),
            source: source.to_owned(),
            hidden: false,
            sub_paths: false,
            scripts: false,
            header_title: None,
        }
    }
}

/// The sections of the site, in sidebar order.
pub fn default_sections() -> Vec<SectionEntry> {
    vec![
        SectionEntry::new(DEFAULT_SECTION_ID, "sections/introduction.html"),
        SectionEntry::new("section-music", "sections/music.html"),
        SectionEntry::new("section-publications", "sections/publications.html"),
        SectionEntry::new("section-experience", "sections/experience.html"),
        SectionEntry { sub_paths: true, scripts: true, ..SectionEntry::new("section-blog", "sections/blog.html") },
        SectionEntry::new("section-misc", "sections/misc.html"),
        SectionEntry {
            hidden: true,
            header_title: Some("Portfolio".to_owned()),
            ..SectionEntry::new("portfolio", "sections/portfolio.html")
        },
    ]
}

/// A URL hash resolved against the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashRoute {
    pub section_id: String,
    /// Remainder after `id/`, left for the fragment's own use.
    pub sub_path: Option<String>,
}

impl HashRoute {
    /// Resolve `hash` (with or without the leading `#`) to a known section.
    ///
    /// Hidden ids resolve too: a bare hidden id in the hash is a deliberate
    /// deep link. Sub-paths resolve only for entries that accept them.
    pub fn resolve(hash: &str, sections: &[SectionEntry]) -> Option<Self> {
        let raw = hash.trim_start_matches('#');
        if raw.is_empty() {
            return None;
        }
        let (base, sub_path) = match raw.split_once('/') {
            Some((base, rest)) => (base, Some(rest)),
            None => (raw, None),
        };
        let entry = sections.iter().find(|s| s.id == base)?;
        if sub_path.is_some() && !entry.sub_paths {
            return None;
        }
        Some(Self { section_id: entry.id.clone(), sub_path: sub_path.map(str::to_owned) })
    }
}

/// Whether `hash` already points below section `id` (`id/...`).
pub fn is_sub_path_of(hash: &str, id: &str) -> bool {
    hash.trim_start_matches('#')
        .strip_prefix(id)
        .is_some_and(|rest| rest.starts_with('/'))
}
