//! Navigation and route table API endpoints.

use std::sync::Arc;

use academy_site::{Page, SidebarView};
use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Query for GET /api/navigation.
#[derive(Debug, Deserialize)]
pub(crate) struct NavigationQuery {
    /// Current route path (default `/`).
    path: Option<String>,
    /// Expanded sidebar section ids.
    nav: Option<String>,
    /// Section id to flip before building the view.
    toggle: Option<String>,
}

/// Handle GET /api/navigation.
///
/// Returns the sidebar sections with expanded and active flags. With
/// `toggle`, the named section is flipped first and the returned toggle links
/// describe the new state.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
) -> Json<SidebarView> {
    let mut sidebar = state.site.sidebar(query.nav.as_deref());
    if let Some(id) = query.toggle.as_deref() {
        sidebar.toggle_by_id(id);
    }
    Json(sidebar.view(query.path.as_deref().unwrap_or("/")))
}

/// Response for GET /api/routes.
#[derive(Serialize)]
pub(crate) struct RoutesResponse {
    routes: Vec<RouteResponse>,
}

/// Route table entry.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteResponse {
    path: String,
    page: Page,
    /// Sidebar entry title, if the route is listed in the navigation.
    #[serde(skip_serializing_if = "Option::is_none")]
    nav_title: Option<String>,
}

/// Handle GET /api/routes.
pub(crate) async fn get_routes(State(state): State<Arc<AppState>>) -> Json<RoutesResponse> {
    let navigation = state.site.navigation();
    let routes = state
        .site
        .routes()
        .routes()
        .iter()
        .map(|route| RouteResponse {
            path: route.path.clone(),
            page: route.page.clone(),
            nav_title: navigation.find_item(&route.path).map(|i| i.title.clone()),
        })
        .collect();
    Json(RoutesResponse { routes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_response_serialization() {
        let response = RoutesResponse {
            routes: vec![
                RouteResponse {
                    path: "/".to_owned(),
                    page: Page::Home,
                    nav_title: None,
                },
                RouteResponse {
                    path: "/tutorials/setup".to_owned(),
                    page: Page::Tutorial("setup".to_owned()),
                    nav_title: Some("Development Environment".to_owned()),
                },
            ],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["routes"][0]["page"]["kind"], "home");
        assert!(json["routes"][0].get("navTitle").is_none());
        assert_eq!(json["routes"][1]["page"]["kind"], "tutorial");
        assert_eq!(json["routes"][1]["page"]["slug"], "setup");
        assert_eq!(json["routes"][1]["navTitle"], "Development Environment");
    }
}
