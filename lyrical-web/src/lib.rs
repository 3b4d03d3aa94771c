//! lyrical-web library - GraphQL gateway for the song/lyric catalog
//!
//! Binds the GraphQL resolver layer to an HTTP endpoint and serves the
//! bundled single-page UI.

use async_graphql_axum::GraphQL;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod graphql;

use graphql::LyricalSchema;

/// Build the application router
///
/// POST /graphql is the single typed API endpoint; GET /graphql serves the
/// GraphiQL playground. The UI is served from embedded assets.
pub fn build_router(schema: LyricalSchema) -> Router {
    Router::new()
        .route(
            "/graphql",
            get(api::graphiql).post_service(GraphQL::new(schema)),
        )
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
}
