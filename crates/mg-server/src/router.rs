//! Axum router construction, one router per service.

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::middleware::request_id::request_id_middleware;
use crate::routes;

/// Routes of the cats service.
pub fn cats_router(ctx: AppContext) -> Router {
    let app = Router::new()
        .route("/", get(routes::cats::index))
        .route(
            "/cats",
            get(routes::cats::list_cats).post(routes::cats::create_cat),
        )
        .route("/cats/{data}", get(routes::cats::describe_cat))
        .with_state(ctx);
    with_ambient_layers(app)
}

/// Routes of the people service.
pub fn people_router(ctx: AppContext) -> Router {
    let app = Router::new()
        .route(
            "/people",
            get(routes::people::list_people).post(routes::people::create_person),
        )
        .with_state(ctx);
    with_ambient_layers(app)
}

/// Routes of the hello service.
pub fn hello_router() -> Router {
    with_ambient_layers(Router::new().route("/", get(routes::hello::hello)))
}

fn with_ambient_layers(app: Router) -> Router {
    app.layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}
