use axum::Router;
use registry::AppRegistry;

use super::{
    health::build_health_check_routers, penalty::build_penalty_routers,
    rating::build_rating_routers, reservation::build_reservation_routers,
    space::build_space_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_space_routers())
        .merge(build_reservation_routers())
        .merge(build_penalty_routers())
        .merge(build_rating_routers());
    Router::new().nest("/api/v1", router)
}
