use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

const PAGES: [&str; 3] = ["index.html", "login.html", "dashboard.html"];

/// Site pages at the root plus everything under `dir` at `/public`.
pub fn router(dir: &Path) -> Router<AppState> {
    let mut router = Router::new().route_service("/", ServeFile::new(dir.join("index.html")));
    for page in PAGES {
        router = router.route_service(&format!("/{page}"), ServeFile::new(dir.join(page)));
    }
    router.nest_service("/public", ServeDir::new(dir))
}
