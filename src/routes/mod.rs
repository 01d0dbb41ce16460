pub mod intake;
pub mod submissions;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn intake_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(intake::probe).post(intake::submit))
        // Path deployed form actions point at
        .route("/exec", get(intake::probe).post(intake::submit))
}

pub fn admin_routes() -> Router<SharedState> {
    Router::new().route("/api/v1/submissions", get(submissions::list))
}
