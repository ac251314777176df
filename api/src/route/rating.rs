use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::rating::register_rating;

pub fn build_rating_routers() -> Router<AppRegistry> {
    let ratings_routers = Router::new().route("/", post(register_rating));

    Router::new().nest("/ratings", ratings_routers)
}
