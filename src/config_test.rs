use super::*;

#[test]
fn default_config_is_valid() {
    let config = SiteConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.site_name, DEFAULT_SITE_NAME);
    assert_eq!(config.default_section, "section-introduction");
    assert_eq!(config.mobile_max_width, 768.0);
    assert_eq!(config.resize_debounce_ms, 250);
    assert!(!config.persist_theme);
    assert_eq!(config.sections.len(), 7);
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = SiteConfig::from_json(r#"{ "site_name": "Someone Else", "persist_theme": true }"#).unwrap();
    assert_eq!(config.site_name, "Someone Else");
    assert!(config.persist_theme);
    assert_eq!(config.sections, default_sections());
    assert_eq!(config.resize_debounce_ms, DEFAULT_RESIZE_DEBOUNCE_MS);
}

#[test]
fn from_json_reads_section_flags() {
    let raw = r#"{
        "default_section": "home",
        "sections": [
            { "id": "home", "source": "sections/home.html" },
            { "id": "notes", "source": "sections/notes.html", "sub_paths": true, "scripts": true },
            { "id": "cv", "source": "sections/cv.html", "hidden": true, "header_title": "CV" }
        ]
    }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.sections.len(), 3);
    let notes = config.section("notes").unwrap();
    assert!(notes.sub_paths && notes.scripts && !notes.hidden);
    let cv = config.section("cv").unwrap();
    assert!(cv.hidden);
    assert_eq!(cv.header_title.as_deref(), Some("CV"));
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(SiteConfig::from_json("{ not json"), Err(ConfigError::Parse(_))));
}

#[test]
fn validate_rejects_empty_registry() {
    let config = SiteConfig { sections: Vec::new(), ..SiteConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::NoSections));
}

#[test]
fn validate_rejects_duplicate_ids() {
    let mut config = SiteConfig::default();
    config.sections.push(SectionEntry::new("section-music", "sections/music-2.html"));
    assert_eq!(config.validate(), Err(ConfigError::DuplicateSection("section-music".to_owned())));
}

#[test]
fn validate_rejects_unknown_or_hidden_default() {
    let config = SiteConfig { default_section: "missing".to_owned(), ..SiteConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::UnknownDefault("missing".to_owned())));

    let config = SiteConfig { default_section: "portfolio".to_owned(), ..SiteConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::HiddenDefault("portfolio".to_owned())));
}

#[test]
fn validate_rejects_non_positive_breakpoint() {
    let config = SiteConfig { mobile_max_width: 0.0, ..SiteConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::InvalidBreakpoint(0.0)));
}

#[test]
fn log_level_parses_or_falls_back_to_info() {
    let config = SiteConfig { log_level: "debug".to_owned(), ..SiteConfig::default() };
    assert_eq!(config.log_level(), log::Level::Debug);
    let config = SiteConfig { log_level: "chatty".to_owned(), ..SiteConfig::default() };
    assert_eq!(config.log_level(), log::Level::Info);
}
