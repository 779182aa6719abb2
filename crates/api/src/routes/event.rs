use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/events", post(handlers::event::create_event))
        .route("/api/events/:id", get(handlers::event::get_event))
        .route("/api/events/:id/widget", get(handlers::widget::get_widget))
}
