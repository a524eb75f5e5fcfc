use axum::{routing::get, Json, Router};
use tracing::{debug, instrument};

use super::catalog::{self, Destination};
use crate::state::AppState;

const PICK_COUNT: usize = 3;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/destinations", get(list_destinations))
}

#[instrument]
pub async fn list_destinations() -> Json<Vec<Destination>> {
    let picked = catalog::pick(&mut rand::thread_rng(), PICK_COUNT);
    debug!(ids = ?picked.iter().map(|d| d.id).collect::<Vec<_>>(), "destinations picked");
    Json(picked)
}
