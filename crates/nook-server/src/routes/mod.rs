pub mod generators;
pub mod home;
pub mod rewrite;
pub mod story;
pub mod writing;

pub use rewrite::RewriteRouteState;

use axum::{
    routing::{get, post},
    Router,
};
use nook_core::TextRewriter;
use std::sync::Arc;

use crate::middleware;

/// Builds the full application: mock story routes, the rewriting relay and
/// the shared middleware stack.
pub fn app(rewriter: Arc<dyn TextRewriter>) -> Router {
    let story_routes = Router::new()
        .route(
            "/api/character-generator",
            post(generators::generate_character),
        )
        .route("/api/world-builder", post(generators::build_world))
        .route("/api/writing-assistant", post(writing::writing_assistant))
        .route("/api/save-story", post(story::save_story));

    let rewrite_routes = Router::new()
        .route("/api/grammar-check", post(rewrite::grammar_check))
        .route("/api/paraphrase", post(rewrite::paraphrase))
        .with_state(Arc::new(RewriteRouteState { rewriter }));

    let router = Router::new()
        .route("/", get(home::home))
        .merge(story_routes)
        .merge(rewrite_routes);

    middleware::layered(router)
}
