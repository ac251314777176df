use axum::{
    routing::{patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::penalty::{register_penalty, update_penalty_status};

pub fn build_penalty_routers() -> Router<AppRegistry> {
    let penalties_routers = Router::new()
        .route("/", post(register_penalty))
        .route("/:penalty_id/status", patch(update_penalty_status));

    Router::new().nest("/penalties", penalties_routers)
}
