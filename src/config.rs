//! Site configuration: the section registry plus layout and theme tunables.
//!
//! Defaults describe the deployed site. A page may override any field with a
//! `<script type="application/json" id="site-config">` block; the browser
//! bootstrap parses it with [`SiteConfig::from_json`] and falls back to the
//! defaults when it is malformed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::registry::{DEFAULT_SECTION_ID, SectionEntry, default_sections};

pub const DEFAULT_SITE_NAME: &str = "Boshi An";
/// Widest viewport, in logical pixels, that still gets the long-scroll layout.
pub const DEFAULT_MOBILE_MAX_WIDTH: f64 = 768.0;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(String),
    #[error("site config lists no sections")]
    NoSections,
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),
    #[error("default section {0} is not registered")]
    UnknownDefault(String),
    #[error("default section {0} is hidden")]
    HiddenDefault(String),
    #[error("mobile breakpoint must be positive, got {0}")]
    InvalidBreakpoint(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub default_section: String,
    pub mobile_max_width: f64,
    pub resize_debounce_ms: u32,
    /// Keep an explicit theme toggle in `localStorage` across reloads.
    pub persist_theme: bool,
    pub log_level: String,
    pub sections: Vec<SectionEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_owned(),
            default_section: DEFAULT_SECTION_ID.to_owned(),
            mobile_max_width: DEFAULT_MOBILE_MAX_WIDTH,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            persist_theme: false,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            sections: default_sections(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or the result fails
    /// [`SiteConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check registry invariants: unique ids and a visible default section.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::DuplicateSection(section.id.clone()));
            }
        }
        match self.section(&self.default_section) {
            None => return Err(ConfigError::UnknownDefault(self.default_section.clone())),
            Some(entry) if entry.hidden => return Err(ConfigError::HiddenDefault(entry.id.clone())),
            Some(_) => {}
        }
        if self.mobile_max_width.is_nan() || self.mobile_max_width <= 0.0 {
            return Err(ConfigError::InvalidBreakpoint(self.mobile_max_width));
        }
        Ok(())
    }

    /// Look up a registry entry by id.
    pub fn section(&self, id: &str) -> Option<&SectionEntry> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Console log level, falling back to `info` for unrecognized names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
