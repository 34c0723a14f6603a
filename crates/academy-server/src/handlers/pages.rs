//! Page endpoint.
//!
//! Every non-API GET lands here: the path is resolved against the route
//! table and rendered inside the shell.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use md5::{Digest, Md5};

use crate::render::{PageOptions, render_page};
use crate::state::AppState;

/// Query parameters understood by page routes.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct PageQuery {
    /// Expanded sidebar section ids.
    nav: Option<String>,
    /// Playground template to preload.
    template: Option<String>,
}

impl PageQuery {
    /// Pick known keys from raw query pairs. The first occurrence of a key
    /// wins; unknown keys are ignored.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "nav" => &mut query.nav,
                "template" => &mut query.template,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// Handle GET for any page path.
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    headers: HeaderMap,
) -> Response {
    let path = uri.path();
    // A malformed query string never keeps the shell from rendering
    let query = match query {
        Ok(Query(pairs)) => PageQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(path, error = %rejection, "Ignoring unparsable query string");
            PageQuery::default()
        }
    };
    let sidebar = state.site.sidebar(query.nav.as_deref());
    let page = render_page(
        &state.site,
        &state.shell,
        path,
        &sidebar,
        &PageOptions {
            template: query.template.as_deref(),
        },
    );

    if page.status != StatusCode::OK {
        return (page.status, Html(page.html)).into_response();
    }

    let etag = compute_etag(&state.version, &page.html);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Html(page.html),
    )
        .into_response()
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_page_query_first_value_wins() {
        let query = PageQuery::from_pairs(pairs(&[
            ("nav", "security"),
            ("template", "erc20"),
            ("nav", "basics"),
            ("template", "dao"),
        ]));

        assert_eq!(
            query,
            PageQuery {
                nav: Some("security".to_owned()),
                template: Some("erc20".to_owned()),
            }
        );
    }

    #[test]
    fn test_page_query_ignores_unknown_keys() {
        let query = PageQuery::from_pairs(pairs(&[("utm_source", "x"), ("nav", "")]));

        assert_eq!(query.nav.as_deref(), Some(""));
        assert_eq!(query.template, None);
    }

    #[test]
    fn test_compute_etag_includes_version() {
        let etag1 = compute_etag("1.0.0", "content");
        let etag2 = compute_etag("1.0.1", "content");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_includes_content() {
        let etag1 = compute_etag("1.0.0", "content1");
        let etag2 = compute_etag("1.0.0", "content2");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        // 16 hex chars + 2 quotes = 18 total
        assert_eq!(etag.len(), 18);
    }
}
