use super::*;

// =============================================================
// default_sections
// =============================================================

#[test]
fn default_sections_start_with_introduction() {
    let sections = default_sections();
    assert_eq!(sections[0].id, DEFAULT_SECTION_ID);
    assert!(!sections[0].hidden);
}

#[test]
fn default_sections_have_unique_ids() {
    let sections = default_sections();
    let mut ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), sections.len());
}

#[test]
fn only_portfolio_is_hidden() {
    let sections = default_sections();
    let hidden: Vec<&str> = sections.iter().filter(|s| s.hidden).map(|s| s.id.as_str()).collect();
    assert_eq!(hidden, vec!["portfolio"]);
    assert_eq!(sections.last().and_then(|s| s.header_title.as_deref()), Some("Portfolio"));
}

#[test]
fn blog_accepts_sub_paths_and_scripts() {
    let sections = default_sections();
    let blog = sections.iter().find(|s| s.id == "section-blog").unwrap();
    assert!(blog.sub_paths);
    assert!(blog.scripts);
}

// =============================================================
// HashRoute::resolve
// =============================================================

#[test]
fn resolve_empty_hash_is_none() {
    assert_eq!(HashRoute::resolve("", &default_sections()), None);
    assert_eq!(HashRoute::resolve("#", &default_sections()), None);
}

#[test]
fn resolve_known_id_with_or_without_hash_sign() {
    let sections = default_sections();
    let route = HashRoute::resolve("#section-music", &sections).unwrap();
    assert_eq!(route.section_id, "section-music");
    assert_eq!(route.sub_path, None);
    assert_eq!(HashRoute::resolve("section-music", &sections), Some(route));
}

#[test]
fn resolve_hidden_id_by_direct_hash() {
    let route = HashRoute::resolve("#portfolio", &default_sections()).unwrap();
    assert_eq!(route.section_id, "portfolio");
}

#[test]
fn resolve_unknown_id_is_none() {
    assert_eq!(HashRoute::resolve("#section-nowhere", &default_sections()), None);
}

#[test]
fn resolve_blog_deep_link_truncates_to_base() {
    let route = HashRoute::resolve("#section-blog/en/first-post", &default_sections()).unwrap();
    assert_eq!(route.section_id, "section-blog");
    assert_eq!(route.sub_path.as_deref(), Some("en/first-post"));
}

#[test]
fn resolve_sub_path_on_plain_section_is_none() {
    assert_eq!(HashRoute::resolve("#section-music/en/x", &default_sections()), None);
}

// =============================================================
// is_sub_path_of
// =============================================================

#[test]
fn sub_path_requires_slash_after_id() {
    assert!(is_sub_path_of("section-blog/en/post", "section-blog"));
    assert!(is_sub_path_of("#section-blog/en/post", "section-blog"));
    assert!(!is_sub_path_of("section-blog", "section-blog"));
    assert!(!is_sub_path_of("section-blogroll/x", "section-blog"));
    assert!(!is_sub_path_of("", "section-blog"));
}
