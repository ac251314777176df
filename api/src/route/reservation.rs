use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    check_in_reservation, check_out_reservation, delete_reservation, register_reservation,
    show_reservation, show_reservation_list, update_reservation_status,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservations_routers = Router::new()
        .route("/", post(register_reservation))
        .route("/", get(show_reservation_list))
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id", delete(delete_reservation))
        .route("/:reservation_id/status", patch(update_reservation_status))
        .route("/:reservation_id/check-in", post(check_in_reservation))
        .route("/:reservation_id/check-out", post(check_out_reservation));

    Router::new().nest("/reservations", reservations_routers)
}
