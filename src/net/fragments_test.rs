use super::*;

#[test]
fn status_error_message_names_the_status() {
    assert_eq!(FragmentLoadError::Status(404).to_string(), "HTTP error! status: 404");
}

#[test]
fn network_error_message_keeps_cause() {
    let err = FragmentLoadError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn error_panel_is_a_single_active_section() {
    assert!(ERROR_PANEL_HTML.starts_with(r#"<div class="section error-panel active">"#));
    assert_eq!(ERROR_PANEL_HTML.matches("<div").count(), 1);
}

#[test]
fn error_panel_suggests_local_servers() {
    assert!(ERROR_PANEL_HTML.contains("Loading Error"));
    assert!(ERROR_PANEL_HTML.contains("python -m http.server"));
    assert!(ERROR_PANEL_HTML.contains("npx serve"));
}

#[cfg(not(feature = "browser"))]
#[test]
fn http_fragments_are_unavailable_off_browser() {
    let result = futures::executor::block_on(HttpFragments.fetch("sections/music.html"));
    assert_eq!(result, Err(FragmentLoadError::Unavailable));
}
