//! Fetch helpers for the page's JSON content documents.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`FetchError::Unavailable`] so the same
//! components can be rendered and tested off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns a `Result`; callers log the failure and leave their
//! section unrendered. There is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::{DataDocument, SiteConfig};

use super::types::{ExperiencesDocument, Job, LinkSet, LinksDocument, Project, ProjectsDocument, SkillsCatalog, SkillsDocument};

/// Failure loading one content document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status}")]
    Http { status: u16 },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed document: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Fetch `doc` and decode it as `T`.
///
/// # Errors
///
/// Returns [`FetchError::Http`] for non-2xx responses, [`FetchError::Transport`]
/// when the request cannot be sent, and [`FetchError::Decode`] when the body
/// is not valid JSON for `T`.
pub async fn fetch_document<T>(config: &SiteConfig, doc: DataDocument) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let url = config.document_url(doc);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Http { status: resp.status() });
        }
        resp.json::<T>().await.map_err(|e| FetchError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, doc);
        Err(FetchError::Unavailable)
    }
}

/// Load navigation and social links from `navLinks.json`.
///
/// # Errors
///
/// See [`fetch_document`].
pub async fn fetch_links(config: &SiteConfig) -> Result<LinkSet, FetchError> {
    let doc: LinksDocument = fetch_document(config, DataDocument::NavLinks).await?;
    Ok(doc.into_link_set())
}

/// Load social links from the standalone `socials.json`.
///
/// # Errors
///
/// See [`fetch_document`].
pub async fn fetch_socials(config: &SiteConfig) -> Result<LinkSet, FetchError> {
    let doc: LinksDocument = fetch_document(config, DataDocument::Socials).await?;
    Ok(doc.into_link_set())
}

/// Load the job history from `experiences.json`.
///
/// # Errors
///
/// See [`fetch_document`].
pub async fn fetch_jobs(config: &SiteConfig) -> Result<Vec<Job>, FetchError> {
    let doc: ExperiencesDocument = fetch_document(config, DataDocument::Experiences).await?;
    Ok(doc.into_jobs())
}

/// Load project cards from `projects.json`.
///
/// # Errors
///
/// See [`fetch_document`].
pub async fn fetch_projects(config: &SiteConfig) -> Result<Vec<Project>, FetchError> {
    let doc: ProjectsDocument = fetch_document(config, DataDocument::Projects).await?;
    Ok(doc.into_projects())
}

/// Load the skills catalog from `skills.json`.
///
/// # Errors
///
/// See [`fetch_document`].
pub async fn fetch_skills(config: &SiteConfig) -> Result<SkillsCatalog, FetchError> {
    let doc: SkillsDocument = fetch_document(config, DataDocument::Skills).await?;
    Ok(doc.into_catalog())
}

/// Console message for a failed section load.
pub fn fetch_failed_message(section: &str, err: &FetchError) -> String {
    format!("{section} fetch error: {err}")
}
