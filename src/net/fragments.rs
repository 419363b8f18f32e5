//! Section fragment retrieval over HTTP.
//!
//! Browser (`browser` feature): real `GET` requests via `gloo-net`.
//! Native builds: every fetch fails with [`FragmentLoadError::Unavailable`]
//! since there is no page to serve fragments from.
//!
//! ERROR HANDLING
//! ==============
//! Failures are never retried. The navigator logs them and swaps the content
//! container for [`ERROR_PANEL_HTML`], which explains how to serve the site.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fragments_test.rs"]
mod fragments_test;

use thiserror::Error;

/// Why a fragment could not be loaded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FragmentLoadError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("fragment fetch is only available in the browser")]
    Unavailable,
}

/// Remediation panel rendered into the content container after a failed load.
///
/// Opening `index.html` from the filesystem is the usual cause, so the panel
/// suggests two one-line local servers.
pub const ERROR_PANEL_HTML: &str = r#"<div class="section error-panel active">
  <h2>Loading Error</h2>
  <p>Unable to load section content. Please make sure you're serving the files from a web server.</p>
  <p>You can run a local server using: <code>python -m http.server</code> or <code>npx serve</code></p>
</div>"#;

/// Something that turns a fragment location into its markup.
#[allow(async_fn_in_trait)]
pub trait FragmentSource {
    /// Fetch the whole fragment at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`FragmentLoadError`] on a non-success status or a transport failure.
    async fn fetch(&self, location: &str) -> Result<String, FragmentLoadError>;
}

/// Fragments fetched relative to the page's own origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpFragments;

impl FragmentSource for HttpFragments {
    async fn fetch(&self, location: &str) -> Result<String, FragmentLoadError> {
        get(location).await
    }
}

#[cfg(feature = "browser")]
async fn get(location: &str) -> Result<String, FragmentLoadError> {
    let resp = gloo_net::http::Request::get(location)
        .send()
        .await
        .map_err(|e| FragmentLoadError::Network(e.to_string()))?;
    let status = resp.status();
    if !(200..300).contains(&status) {
        return Err(FragmentLoadError::Status(status));
    }
    resp.text()
        .await
        .map_err(|e| FragmentLoadError::Network(e.to_string()))
}

#[cfg(not(feature = "browser"))]
async fn get(_location: &str) -> Result<String, FragmentLoadError> {
    Err(FragmentLoadError::Unavailable)
}
